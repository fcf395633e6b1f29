
/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Debug, Clone)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.elements.pop()
  }

  /// The top of the stack, without popping it.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
  }

  #[test]
  fn test_peek() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), None);
    stack.push('a');
    stack.push('b');
    assert_eq!(stack.peek(), Some(&'b'));
    assert_eq!(stack.len(), 2);
  }

  #[test]
  fn test_is_empty() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push(0);
    assert!(!stack.is_empty());
    stack.pop();
    assert!(stack.is_empty());
  }
}
