use crate::error::Overflow;

/// The runtime value stack of one expression execution.
///
/// Each call to `execute` owns a fresh stack, so a compiled expression holds
/// no execution state. The optional maximum size is always enforced: pushing
/// beyond it fails instead of growing.
///
/// # Examples
///
/// ```ignore
/// let mut stack = Stack::new(Some(100));
/// stack.push(42)?;
/// stack.push(17)?;
/// assert_eq!(stack.pop_n(1), Some(vec![17]));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug)]
pub(crate) struct Stack<T> {
    /// The underlying storage, bottom first.
    items: Vec<T>,
    /// Maximum allowed stack size, if any.
    max_size: Option<usize>,
}

impl<T> Stack<T> {
    /// Creates an empty stack holding at most `max_size` values.
    pub fn new(max_size: Option<usize>) -> Self {
        // Pre-allocate a reasonable amount to avoid frequent reallocations.
        let initial_capacity = max_size.map_or(16, |max| max.min(256));

        Self {
            items: Vec::with_capacity(initial_capacity),
            max_size,
        }
    }

    /// Pushes a value onto the stack, failing if the stack is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Overflow> {
        if let Some(max) = self.max_size {
            if self.items.len() >= max {
                return Err(Overflow {
                    size: self.items.len() + 1,
                    max,
                });
            }
        }
        self.items.push(value);
        Ok(())
    }

    /// Pushes every value in order; the last one ends up on top.
    pub fn extend(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), Overflow> {
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Removes the top `n` values and returns them, bottom-most first.
    ///
    /// Returns `None`, leaving the stack untouched, if fewer than `n` values
    /// are present.
    #[inline]
    pub fn pop_n(&mut self, n: usize) -> Option<Vec<T>> {
        let len = self.items.len();
        if n > len {
            None
        } else {
            Some(self.items.split_off(len - n))
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consumes the stack, returning its values bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack: Stack<i32> = Stack::new(Some(100));
        assert_eq!(stack.len(), 0);
        assert!(stack.into_vec().is_empty());
    }

    #[test]
    fn test_push_pop_n() {
        let mut stack = Stack::new(None);
        stack.extend([10, 20, 30, 40]).unwrap();

        assert_eq!(stack.pop_n(2), Some(vec![30, 40]));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop_n(0), Some(vec![]));
        assert_eq!(stack.into_vec(), vec![10, 20]);
    }

    #[test]
    fn test_pop_n_underflow_leaves_stack() {
        let mut stack = Stack::new(None);
        stack.push(1).unwrap();
        assert_eq!(stack.pop_n(2), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_overflow() {
        let mut stack = Stack::new(Some(2));
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.push(3), Err(Overflow { size: 3, max: 2 }));
        assert_eq!(stack.len(), 2);

        let mut stack = Stack::new(Some(2));
        assert_eq!(stack.extend([1, 2, 3]), Err(Overflow { size: 3, max: 2 }));
    }

    #[test]
    fn test_large_stack() {
        let mut stack = Stack::new(Some(10000));
        for i in 0..1000 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.len(), 1000);
        assert_eq!(stack.pop_n(1000), Some((0..1000).collect()));
    }
}
