use core::fmt::Debug;

/// A type of the embedding application's type system.
///
/// The engine compares types only through `PartialEq` and prints them only
/// through [`Type::name`]. Equality must mean "the same type" for the
/// embedder: fieldless enums and interned references are the usual shapes.
pub trait Type: Clone + PartialEq + Debug {
    /// Display name, used in descriptors and error messages.
    fn name(&self) -> &str;
}

// Interned type handles (`&'a Ty`) compare by the pointee's equality.
impl<T: Type> Type for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}
