//! Structural type descriptors.
//!
//! A [`TypeDescriptor`] is the runtime shape of a type: its name, size,
//! identity, and (for composites) the descriptors of every declared field.
//! Descriptors are `'static` and built in const context, so a type's
//! descriptor lives as long as the process.

use core::any::TypeId;
use core::fmt;

/// Scalar representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    /// Unicode scalar value.
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl Primitive {
    /// Whether two values with the same bits are always equal and vice versa.
    ///
    /// Floats fail both directions: `NaN != NaN` and `0.0 == -0.0`.
    pub const fn is_bitwise_equatable(self) -> bool {
        !matches!(self, Primitive::F32 | Primitive::F64)
    }
}

/// Kinds of tracked references.
///
/// Byte copies of any of these either alias ownership or bypass the
/// borrow checker, so none is reference-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `&T`
    Shared,
    /// `&mut T`
    Unique,
    /// `Box<T>`
    Boxed,
    /// `Vec<T>`
    Vec,
    /// `String`
    String,
    /// `Rc<T>` / `Arc<T>`
    Counted,
}

/// What a type is made of.
#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    Primitive(Primitive),
    /// Field-less enum with the given discriminant representation.
    Enum(Primitive),
    /// Raw pointer.
    Pointer,
    Reference(ReferenceKind),
    /// `Option<T>`
    Optional(&'static TypeDescriptor),
    /// `[T; N]`
    Array {
        element: &'static TypeDescriptor,
        len: usize,
    },
    /// Struct, tuple struct, unit struct, or tuple.
    Struct(&'static [FieldDescriptor]),
    /// Enum with payload-carrying variants. Fields of all variants are
    /// flattened into one list.
    Variants(&'static [FieldDescriptor]),
}

/// A declared field: its name (`"0"`, `"1"` for tuple fields) and type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: &'static TypeDescriptor,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, ty: &'static TypeDescriptor) -> Self {
        Self { name, ty }
    }
}

/// Process-lifetime description of a concrete type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    name: &'static str,
    size: usize,
    type_id: fn() -> TypeId,
    kind: TypeKind,
}

impl TypeDescriptor {
    pub const fn new(
        name: &'static str,
        size: usize,
        type_id: fn() -> TypeId,
        kind: TypeKind,
    ) -> Self {
        Self { name, size, type_id, kind }
    }

    pub const fn primitive(
        name: &'static str,
        size: usize,
        type_id: fn() -> TypeId,
        primitive: Primitive,
    ) -> Self {
        Self::new(name, size, type_id, TypeKind::Primitive(primitive))
    }

    pub const fn composite(
        name: &'static str,
        size: usize,
        type_id: fn() -> TypeId,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self::new(name, size, type_id, TypeKind::Struct(fields))
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Identity of the described type. Used as the trait cache key.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Declared fields for composite kinds, empty otherwise.
    pub const fn fields(&self) -> &'static [FieldDescriptor] {
        match self.kind {
            TypeKind::Struct(fields) | TypeKind::Variants(fields) => fields,
            _ => &[],
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_allowlist() {
        assert!(Primitive::Char.is_bitwise_equatable());
        assert!(Primitive::U128.is_bitwise_equatable());
        assert!(!Primitive::F32.is_bitwise_equatable());
        assert!(!Primitive::F64.is_bitwise_equatable());
    }
}
