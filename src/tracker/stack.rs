pub trait Stack<T> {
    fn peek(&self) -> Option<&T>;

    /// The `count` most recently pushed entries, oldest first.
    fn tail(&self, count: usize) -> &[T];
}

impl<T> Stack<T> for Vec<T> {
    fn peek(&self) -> Option<&T> {
        let len = self.len();
        if len == 0 {
            None
        } else {
            Some(&self[len - 1])
        }
    }

    fn tail(&self, count: usize) -> &[T] {
        let len = self.len();
        &self[len.saturating_sub(count)..]
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;

    #[test]
    fn peek_sees_last_pushed() {
        let mut stack = Vec::new();
        assert_eq!(stack.peek(), None);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
    }

    #[test]
    fn tail_is_bounded_by_len() {
        let stack = vec!['a', 'b', 'c'];
        assert_eq!(stack.tail(2), &['b', 'c']);
        assert_eq!(stack.tail(10), &['a', 'b', 'c']);
        assert!(stack.tail(0).is_empty());
    }
}
