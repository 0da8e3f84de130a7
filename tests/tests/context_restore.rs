//! Context restoration guarantees, exercised end to end

use zring_algorithms::bigint::Integer;
use zring_algorithms::context::{zp, zp64};
use zring_algorithms::modular::ModInt;
use zring_api::error::Error;

// Each test gets its own thread: the contexts are thread-local and the
// test harness shares threads between tests.
fn isolated(body: impl FnOnce() + Send + 'static) {
    std::thread::spawn(body).join().expect("test thread panicked");
}

#[test]
fn current_is_restored_after_normal_return() {
    isolated(|| {
        zp::init(&Integer::from(17)).unwrap();
        let before = zp::current().unwrap();

        let result = zp::with_modulus(&Integer::from(101), || {
            ModInt::new(150).unwrap().rep()
        })
        .unwrap();
        assert_eq!(result, Integer::from(49));
        assert_eq!(zp::current().unwrap(), before);
    });
}

#[test]
fn current_is_restored_after_a_panic() {
    isolated(|| {
        zp::init(&Integer::from(17)).unwrap();

        let caught = std::panic::catch_unwind(|| {
            let _ = zp::with_modulus(&Integer::from(101), || {
                let _probe = ModInt::new(3).unwrap();
                panic!("deliberate failure inside the scoped body");
            });
        });
        assert!(caught.is_err());
        assert_eq!(zp::current().unwrap().modulus(), Integer::from(17));

        // The restored context is fully usable
        assert_eq!(ModInt::new(20).unwrap().rep(), Integer::from(3));
    });
}

#[test]
fn deep_nesting_unwinds_in_order() {
    isolated(|| {
        let moduli = [3u64, 5, 7, 11, 13];
        fn descend(moduli: &[u64]) {
            if let Some((&p, rest)) = moduli.split_first() {
                zp64::with_modulus(p, || {
                    assert_eq!(zp64::current().unwrap().modulus(), p);
                    descend(rest);
                    assert_eq!(zp64::current().unwrap().modulus(), p);
                })
                .unwrap();
            }
        }
        descend(&moduli);
        // Back at the top nothing is installed
        assert!(matches!(
            zp64::current(),
            Err(Error::InvalidModulus { .. })
        ));
    });
}

#[test]
fn snapshots_round_trip_through_reinitialization() {
    isolated(|| {
        zp::init(&Integer::from(17)).unwrap();
        let outer = zp::ZpContext::save();

        zp::init(&Integer::from(19)).unwrap();
        let inner = zp::ZpContext::save();

        zp::init(&Integer::from(23)).unwrap();
        inner.restore();
        assert_eq!(zp::current().unwrap().modulus(), Integer::from(19));
        outer.restore();
        assert_eq!(zp::current().unwrap().modulus(), Integer::from(17));
    });
}

#[test]
fn values_outlive_the_context_that_built_them() {
    isolated(|| {
        // The redesigned model: elements carry their ring, so a value
        // built under a scoped modulus stays correct after restoration
        let element = zp::with_modulus(&Integer::from(101), || ModInt::new(100).unwrap())
            .unwrap();
        assert!(zp::current().is_err());
        assert_eq!(element.modulus(), Integer::from(101));
        assert_eq!((&element + &element).rep(), Integer::from(99));
    });
}
