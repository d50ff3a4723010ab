pub use {
    perchance_maybe as maybe, // maybe
};

pub mod prelude {
    pub use crate::maybe::{IntoMaybe, Maybe, always_present};
}
