use crate::wrap::IntoMaybe;

/// A value that is either present or absent.
///
/// Wrapping decides presence once, and every [`select`](Maybe::select) link
/// re-derives it from the transform's result, so a lookup across a
/// possibly-absent object graph never tests for `None` in the middle.
/// ```
/// # use perchance_maybe::Maybe;
/// let postal = Maybe::wrap(Some(("08401", "ES")))
///     .filter(|(_, country)| *country == "ES")
///     .return_or_default(|(postal, _)| postal, || "None");
///
/// assert_eq!(postal, "08401");
/// ```
///
/// Two containers are equal if both are absent, or both are present and
/// hold equal values.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// The canonical absent container.
    pub const ABSENT: Self = Self::Absent;

    /// Wrap a value, deciding presence from the shape of the value.
    ///
    /// Plain values are always present, even when zero or empty. An
    /// [`Option`] stands in for a nullable reference: `Some` wraps to a
    /// present container of the inner type, `None` wraps to an absent one.
    /// ```
    /// # use perchance_maybe::Maybe;
    /// assert!(Maybe::wrap(0).is_present());
    /// assert!(Maybe::wrap(None::<i32>).is_absent());
    /// ```
    pub fn wrap(value: impl IntoMaybe<Element = T>) -> Self {
        value.into_maybe()
    }

    /// The absent container for `T`.
    pub const fn absent() -> Self {
        Self::Absent
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Get a reference to the value, if there is one.
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Consume the container and produce the value, if there is one.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Transform the value if there is one.
    ///
    /// The transform's result passes through the presence rule again, so a
    /// transform producing `None` yields an absent container rather than a
    /// present container holding `None`.
    /// An absent input stays absent and the transform is never invoked.
    /// ```
    /// # use perchance_maybe::Maybe;
    /// let len = Maybe::wrap(String::from("hello")).select(|s| s.len());
    /// assert_eq!(len, Maybe::Present(5));
    /// ```
    pub fn select<F, V>(self, transform: F) -> Maybe<V::Element>
    where
        F: FnOnce(T) -> V,
        V: IntoMaybe,
    {
        match self {
            Self::Present(value) => transform(value).into_maybe(),
            Self::Absent => Maybe::Absent,
        }
    }

    /// As [`select`](Maybe::select), falling back to `default` whenever the
    /// selected result is absent.
    ///
    /// `default` is only invoked on the absence path, and its result passes
    /// through the presence rule like any transform result.
    pub fn select_or_default<F, V, D, W>(self, transform: F, default: D) -> Maybe<V::Element>
    where
        F: FnOnce(T) -> V,
        V: IntoMaybe,
        D: FnOnce() -> W,
        W: IntoMaybe<Element = V::Element>,
    {
        match self.select(transform) {
            Maybe::Absent => default().into_maybe(),
            present => present,
        }
    }

    /// As [`select`](Maybe::select), but unwrap the result: a present
    /// selection produces its raw value, anything else produces `default()`.
    pub fn return_or_default<F, V, D>(self, transform: F, default: D) -> V::Element
    where
        F: FnOnce(T) -> V,
        V: IntoMaybe,
        D: FnOnce() -> V::Element,
    {
        match self.select(transform) {
            Maybe::Present(value) => value,
            Maybe::Absent => default(),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// An absent container passes through untouched and the predicate is
    /// never invoked.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => match predicate(&value) {
                true => Self::Present(value),
                false => Self::Absent,
            },
            Self::Absent => Self::Absent,
        }
    }

    /// Run `action` on the value if there is one, then hand the container
    /// back unchanged for further chaining.
    pub fn execute<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
