/// Build a [`DynamicArray`](crate::DynamicArray) from a list of elements.
///
/// Mirrors `vec!`: a comma-separated list moves each element in, and
/// `dyn_array![value; n]` clones `value` into `n` slots.
///
/// ```
/// use keel_vector::dyn_array;
///
/// let words = dyn_array!["keel", "hull", "mast"];
/// assert_eq!(words.size(), 3);
///
/// let zeros = dyn_array![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{ArrayConfig, DynamicArray};

    #[test]
    fn empty_form() {
        let values: DynamicArray<i32> = dyn_array![];
        assert!(values.is_empty());
        assert_eq!(values.capacity(), ArrayConfig::DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn list_form_keeps_order() {
        let values = dyn_array![3, 1, 2,];
        assert_eq!(values, [3, 1, 2]);
        assert_eq!(values.capacity(), 3);
    }

    #[test]
    fn repeat_form_clones() {
        let values = dyn_array![String::from("ab"); 3];
        assert_eq!(values.size(), 3);
        assert!(values.iter().all(|s| s == "ab"));
    }

    #[test]
    fn repeat_form_with_zero_count() {
        let values = dyn_array![1.5f32; 0];
        assert!(values.is_empty());
    }
}
