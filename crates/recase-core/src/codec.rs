//! Generic bidirectional-transform algebra.
//!
//! A [`Codec`] converts between a structured value ([`Codec::Value`]) and a
//! flat representation ([`Codec::Repr`]). The algebra is closed under two
//! combinators:
//!
//! - [`invert`] swaps the encode/decode roles;
//! - [`compose`] chains two codecs through a shared intermediate type.
//!
//! together with the trivial [`identity`] codec. The laws:
//!
//! ```text
//! invert(invert(c))      behaves like c
//! compose(c, identity()) behaves like c
//! compose(a, b).encode = b.encode ∘ a.encode
//! compose(a, b).decode = a.decode ∘ b.decode
//! ```
//!
//! Every naming-convention codec in [`crate::format`] implements this trait,
//! and the [`crate::Transcoder`] is nothing but
//! `compose(invert(src), dst)` — any future wire-format codec can reuse the
//! same machinery.
//!
//! Both directions return [`CodecResult`] so the algebra stays closed under
//! inversion: an inverted codec's decode is the original's encode, failure
//! path included.

use std::marker::PhantomData;

use crate::error::CodecResult;

/// A stateless, pure bidirectional transform between a structured value and
/// its flat representation.
///
/// Implementations must be side-effect free: two calls with equal inputs
/// return equal outputs, and no call observes or mutates shared state.
pub trait Codec {
    /// The structured side of the transform.
    type Value;
    /// The flat (serialized) side of the transform.
    type Repr;

    /// Recover a value from its representation.
    fn decode(&self, repr: &Self::Repr) -> CodecResult<Self::Value>;

    /// Render a value into its representation.
    fn encode(&self, value: &Self::Value) -> CodecResult<Self::Repr>;
}

// References delegate, so `&'static` codec instances participate in the
// algebra without cloning.
impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;
    type Repr = C::Repr;

    fn decode(&self, repr: &Self::Repr) -> CodecResult<Self::Value> {
        (**self).decode(repr)
    }

    fn encode(&self, value: &Self::Value) -> CodecResult<Self::Repr> {
        (**self).encode(value)
    }
}

// ── invert ────────────────────────────────────────────────────────────────────

/// A codec with its encode/decode roles swapped. See [`invert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inverted<C> {
    inner: C,
}

impl<C> Inverted<C> {
    /// Recover the codec that was inverted.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Codec> Codec for Inverted<C> {
    type Value = C::Repr;
    type Repr = C::Value;

    fn decode(&self, repr: &Self::Repr) -> CodecResult<Self::Value> {
        self.inner.encode(repr)
    }

    fn encode(&self, value: &Self::Value) -> CodecResult<Self::Repr> {
        self.inner.decode(value)
    }
}

/// Swap a codec's encode and decode roles.
///
/// `invert(invert(c))` is behaviorally identical to `c` (structurally it is
/// `Inverted<Inverted<C>>`; use [`Inverted::into_inner`] twice to unwrap).
pub fn invert<C: Codec>(codec: C) -> Inverted<C> {
    Inverted { inner: codec }
}

// ── compose ───────────────────────────────────────────────────────────────────

/// Two codecs chained through a shared intermediate type. See [`compose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed<A, B> {
    first: A,
    second: B,
}

impl<A, B> Codec for Composed<A, B>
where
    A: Codec,
    B: Codec<Value = A::Repr>,
{
    type Value = A::Value;
    type Repr = B::Repr;

    fn decode(&self, repr: &Self::Repr) -> CodecResult<Self::Value> {
        let mid = self.second.decode(repr)?;
        self.first.decode(&mid)
    }

    fn encode(&self, value: &Self::Value) -> CodecResult<Self::Repr> {
        let mid = self.first.encode(value)?;
        self.second.encode(&mid)
    }
}

/// Chain two codecs: `first` carries `Value ⇄ Mid`, `second` carries
/// `Mid ⇄ Repr`, and the result carries `Value ⇄ Repr`.
///
/// The intermediate value is threaded between the two; a failure on either
/// side propagates unchanged.
pub fn compose<A, B>(first: A, second: B) -> Composed<A, B>
where
    A: Codec,
    B: Codec<Value = A::Repr>,
{
    Composed { first, second }
}

// ── identity ──────────────────────────────────────────────────────────────────

/// The do-nothing codec: both directions clone. See [`identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity<T> {
    _marker: PhantomData<T>,
}

impl<T: Clone> Codec for Identity<T> {
    type Value = T;
    type Repr = T;

    fn decode(&self, repr: &T) -> CodecResult<T> {
        Ok(repr.clone())
    }

    fn encode(&self, value: &T) -> CodecResult<T> {
        Ok(value.clone())
    }
}

/// The identity codec for any cloneable type.
pub fn identity<T: Clone>() -> Identity<T> {
    Identity {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    /// Tiny test codec: usize ⇄ decimal string.
    struct Decimal;

    impl Codec for Decimal {
        type Value = usize;
        type Repr = String;

        fn decode(&self, repr: &String) -> CodecResult<usize> {
            repr.parse().map_err(|_| CodecError::MalformedInput {
                format: "decimal",
                input: repr.clone(),
                reason: "not a number".into(),
            })
        }

        fn encode(&self, value: &usize) -> CodecResult<String> {
            Ok(value.to_string())
        }
    }

    /// usize ⇄ usize, doubling on encode.
    struct Doubler;

    impl Codec for Doubler {
        type Value = usize;
        type Repr = usize;

        fn decode(&self, repr: &usize) -> CodecResult<usize> {
            Ok(repr / 2)
        }

        fn encode(&self, value: &usize) -> CodecResult<usize> {
            Ok(value * 2)
        }
    }

    #[test]
    fn invert_swaps_directions() {
        let inv = invert(Decimal);
        assert_eq!(inv.decode(&7).unwrap(), "7");
        assert_eq!(inv.encode(&"42".to_string()).unwrap(), 42);
    }

    #[test]
    fn double_inversion_behaves_like_original() {
        let twice = invert(invert(Decimal));
        assert_eq!(twice.decode(&"13".to_string()).unwrap(), 13);
        assert_eq!(twice.encode(&13).unwrap(), "13");
    }

    #[test]
    fn compose_threads_the_intermediate_value() {
        // Doubler: usize ⇄ usize, Decimal: usize ⇄ String.
        let codec = compose(Doubler, Decimal);
        assert_eq!(codec.encode(&5).unwrap(), "10");
        assert_eq!(codec.decode(&"10".to_string()).unwrap(), 5);
    }

    #[test]
    fn compose_with_identity_is_transparent() {
        let codec = compose(Decimal, identity::<String>());
        assert_eq!(codec.encode(&9).unwrap(), "9");
        assert_eq!(codec.decode(&"9".to_string()).unwrap(), 9);
    }

    #[test]
    fn compose_propagates_decode_failure() {
        let codec = compose(Decimal, identity::<String>());
        assert!(codec.decode(&"not-a-number".to_string()).is_err());
    }

    #[test]
    fn reference_codecs_delegate() {
        let by_ref: &Decimal = &Decimal;
        assert_eq!(by_ref.encode(&3).unwrap(), "3");
    }
}
