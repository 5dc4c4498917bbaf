/// Concatenates supplied byte slices into one vector.
#[macro_export]
macro_rules! concat_slices {
    ($($slice: expr),+) => {
        [$(&$slice[..]),+].concat()
    }
}

/// Implements `Deref` for a single-field tuple wrapper, optionally generic over one field type.
#[macro_export]
macro_rules! impl_deref {
    ($wrapper: ident<$gen: ident: $bound: path>($inner: ty)) => {
        impl<$gen: $bound> core::ops::Deref for $wrapper<$gen> {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
    ($wrapper: ident($inner: ty)) => {
        impl core::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}
