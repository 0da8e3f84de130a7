//! Thread-local modulus contexts
//!
//! Field elements can be built without threading a ring descriptor through
//! every call site: [`zp::init`] installs a "current modulus" for the
//! thread, and `ModInt::new` reads it at construction time. The slot is
//! consulted *only* at construction — every value carries its ring from
//! then on, so arithmetic is unaffected by later context changes and
//! nothing here is shared between threads.
//!
//! Each context offers the same discipline:
//!
//! - `init(p)` replaces the slot (rejecting unusable moduli),
//! - `current()` reads it without side effects,
//! - a snapshot object captures and restores the exact slot state,
//! - `with_modulus(p, body)` brackets `body` between install and restore,
//!   restoring on *every* exit path — normal return, early return, or
//!   panic — through a drop guard.

use core::cell::RefCell;

use zring_api::error::{Error, Result};

use crate::bigint::Integer;
use crate::extension::ExtRing;
use crate::modular::{ModRing, ModRing64};
use crate::poly::Poly;


fn uninitialized() -> Error {
    // The empty slot is modelled as modulus 0, which is never usable
    Error::InvalidModulus {
        modulus: alloc::string::String::from("0"),
    }
}

macro_rules! context_impl {
    ($slot:ident, $ring:ty, $snapshot:ident) => {
        std::thread_local! {
            static $slot: RefCell<Option<$ring>> = const { RefCell::new(None) };
        }

        /// The current ring descriptor, without side effects
        ///
        /// Fails with [`Error::InvalidModulus`] while the slot is
        /// uninitialized.
        pub fn current() -> Result<$ring> {
            $slot
                .with(|slot| slot.borrow().clone())
                .ok_or_else(super::uninitialized)
        }

        /// A saved copy of the slot state, including "uninitialized"
        ///
        /// Restoring writes the captured state back exactly.
        #[derive(Debug, Clone)]
        pub struct $snapshot {
            saved: Option<$ring>,
        }

        impl $snapshot {
            /// Capture the current slot state
            pub fn save() -> Self {
                Self {
                    saved: $slot.with(|slot| slot.borrow().clone()),
                }
            }

            /// Overwrite the slot with the captured state
            pub fn restore(self) {
                $slot.with(|slot| *slot.borrow_mut() = self.saved);
            }
        }

        struct RestoreGuard {
            saved: Option<$ring>,
        }

        impl Drop for RestoreGuard {
            fn drop(&mut self) {
                let saved = self.saved.take();
                $slot.with(|slot| *slot.borrow_mut() = saved);
            }
        }

        fn install(ring: $ring) -> RestoreGuard {
            RestoreGuard {
                saved: $slot.with(|slot| slot.borrow_mut().replace(ring)),
            }
        }

        fn set(ring: $ring) {
            $slot.with(|slot| *slot.borrow_mut() = Some(ring));
        }
    };
}

/// Context for the arbitrary-precision prime field (`ModRing`/`ModInt`)
pub mod zp {
    use super::*;

    context_impl!(CURRENT_ZP, ModRing, ZpContext);

    /// Install `p` as the thread's current modulus
    ///
    /// Fails with [`Error::InvalidModulus`] unless `p > 1`; the slot is
    /// replaced in a single assignment, never merged with prior state.
    pub fn init(p: &Integer) -> Result<()> {
        set(ModRing::new(p)?);
        Ok(())
    }

    /// Run `body` with modulus `p` installed, restoring the previous
    /// context on every exit path
    ///
    /// Nesting is transparent: an inner call captures and restores around
    /// the outer modulus. The restore runs from a drop guard, so it also
    /// happens while a panic from `body` unwinds.
    pub fn with_modulus<T>(p: &Integer, body: impl FnOnce() -> T) -> Result<T> {
        let guard = install(ModRing::new(p)?);
        let result = body();
        drop(guard);
        Ok(result)
    }
}

/// Context for the machine-word prime field (`ModRing64`/`ModInt64`)
pub mod zp64 {
    use super::*;

    context_impl!(CURRENT_ZP64, ModRing64, Zp64Context);

    /// Install `p` as the thread's current word modulus
    pub fn init(p: u64) -> Result<()> {
        set(ModRing64::new(p)?);
        Ok(())
    }

    /// Run `body` with word modulus `p` installed, restoring the previous
    /// context on every exit path
    pub fn with_modulus<T>(p: u64, body: impl FnOnce() -> T) -> Result<T> {
        let guard = install(ModRing64::new(p)?);
        let result = body();
        drop(guard);
        Ok(result)
    }
}

/// Context for the extension field (`ExtRing`/`ExtElem`)
pub mod zpe {
    use super::*;

    context_impl!(CURRENT_ZPE, ExtRing, ZpeContext);

    /// Install the extension defined by `modulus` as the thread's current
    /// extension field
    ///
    /// Validation matches [`ExtRing::new`]: degree >= 1 is required, and a
    /// modulus failing the irreducibility test warns instead of failing.
    pub fn init(modulus: Poly<ModRing>) -> Result<()> {
        set(ExtRing::new(modulus)?);
        Ok(())
    }

    /// Run `body` with the given extension installed, restoring the
    /// previous context on every exit path
    pub fn with_modulus<T>(modulus: Poly<ModRing>, body: impl FnOnce() -> T) -> Result<T> {
        let guard = install(ExtRing::new(modulus)?);
        let result = body();
        drop(guard);
        Ok(result)
    }
}
