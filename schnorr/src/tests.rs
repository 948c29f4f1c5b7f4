use super::*;
use crate::keys::SigningKey;
use curve::{Affine, BaseField, PedersenHasher, ScalarField, multi_scalar_mul, pedersen_hash};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FIXTURE_PK_X: &str = "04b260954662e97f00cab9adb773a259097f7a274b83b113532bce27fa3fb96a";
const FIXTURE_PK_Y: &str = "2fd51571db6c08666b0edfbfbc57d432068bccd0110a39b166ab243da0037197";

const FIXTURE_SIG: [u8; SIG_SIZE] = [
    1, 13, 119, 112, 212, 39, 233, 41, 84, 235, 255, 93, 245, 172, 186, 83, 157, 253, 76, 77, 33,
    128, 178, 15, 214, 67, 105, 107, 177, 234, 77, 48, 27, 237, 155, 84, 39, 84, 247, 27, 22, 8,
    176, 230, 24, 115, 145, 220, 254, 122, 135, 179, 171, 4, 214, 202, 64, 199, 19, 84, 239, 138,
    124, 12,
];

fn field(s: &str) -> BaseField {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(s, &mut bytes).expect("valid hex");
    BaseField::from_be_bytes(&bytes)
}

fn fixture_key() -> Affine {
    Affine::new(field(FIXTURE_PK_X), field(FIXTURE_PK_Y))
}

fn fixture_message() -> Vec<u8> {
    (0u8..10).collect()
}

#[test]
fn test_fixture_verifies() {
    let pk = fixture_key();
    assert!(pk.is_on_curve());
    assert!(verify_signature(&pk, &FIXTURE_SIG, &fixture_message()));
    assert_eq!(check_signature(&pk, &FIXTURE_SIG, &fixture_message()), Ok(()));
    assert_valid_signature(&pk, &FIXTURE_SIG, &fixture_message());
}

#[test]
fn test_fixture_intermediate_values() {
    let pk = fixture_key();
    let sig_s = decode_scalar(&FIXTURE_SIG, 0);
    let sig_e = decode_scalar(&FIXTURE_SIG, 32);

    let r = multi_scalar_mul(&[Affine::GENERATOR, pk], &[sig_s, sig_e]);
    assert_eq!(
        r.x,
        field("2d5789314482e0689ce708db97ec19ee03f413faeb863be71d2cc5e02a72c9c4")
    );
    assert_eq!(
        pedersen_hash(&[r.x, pk.x, pk.y]),
        field("06a2a56a789fbd7d5b4fcbda4b84539503a4715590402d2db2ba1e1ba2658445")
    );

    let (r_is_infinity, challenge) = compute_challenge(&pk, &sig_s, &sig_e, &fixture_message());
    assert!(!r_is_infinity);
    assert_eq!(&challenge[..], &FIXTURE_SIG[32..]);
}

#[test]
fn test_all_zero_signature_rejected() {
    let pk = fixture_key();
    let msg = [2u8; 64];
    let zero = [0u8; SIG_SIZE];

    assert!(!verify_signature(&pk, &zero, &msg));
    assert_eq!(
        check_signature(&pk, &zero, &msg),
        Err(SignatureError::ZeroResponse)
    );
}

#[test]
fn test_zero_challenge_rejected() {
    let pk = fixture_key();
    let mut sig = FIXTURE_SIG;
    sig[32..].fill(0);

    assert_eq!(
        check_signature(&pk, &sig, &fixture_message()),
        Err(SignatureError::ZeroChallenge)
    );
}

#[test]
fn test_signature_bit_flips_rejected() {
    let pk = fixture_key();
    let msg = fixture_message();

    for i in 0..SIG_SIZE {
        for bit in 0..8 {
            let mut sig = FIXTURE_SIG;
            sig[i] ^= 1 << bit;
            assert!(
                !verify_signature(&pk, &sig, &msg),
                "flip of bit {bit} in byte {i} accepted"
            );
        }
    }
}

#[test]
fn test_message_bit_flips_rejected() {
    let pk = fixture_key();
    let msg = fixture_message();

    for i in 0..msg.len() {
        for bit in 0..8 {
            let mut tampered = msg.clone();
            tampered[i] ^= 1 << bit;
            assert!(
                matches!(
                    check_signature(&pk, &FIXTURE_SIG, &tampered),
                    Err(SignatureError::ChallengeMismatch { .. })
                ),
                "flip of bit {bit} in message byte {i} accepted"
            );
        }
    }

    // length is part of the hashed message
    assert!(!verify_signature(&pk, &FIXTURE_SIG, &msg[..9]));
    let mut longer = msg.clone();
    longer.push(0);
    assert!(!verify_signature(&pk, &FIXTURE_SIG, &longer));
}

#[test]
fn test_mismatch_reports_byte_index() {
    let pk = fixture_key();
    let mut sig = FIXTURE_SIG;
    // the challenge is hashed from R, so changing e also changes the
    // recomputed challenge; only the index of some mismatch is guaranteed
    sig[63] ^= 0xff;
    match check_signature(&pk, &sig, &fixture_message()) {
        Err(SignatureError::ChallengeMismatch { index }) => assert!(index < CHALLENGE_SIZE),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_off_curve_key_rejected() {
    let pk = Affine::new(BaseField::ONE, BaseField::from_canonical_u64(2));
    assert!(!verify_signature(&pk, &FIXTURE_SIG, &fixture_message()));
    assert_eq!(
        check_signature(&pk, &FIXTURE_SIG, &fixture_message()),
        Err(SignatureError::PublicKeyNotOnCurve)
    );

    // a valid x with the wrong y
    let mut pk = fixture_key();
    pk.y += BaseField::ONE;
    assert_eq!(
        check_signature(&pk, &FIXTURE_SIG, &fixture_message()),
        Err(SignatureError::PublicKeyNotOnCurve)
    );
}

#[test]
fn test_infinity_key_rejected() {
    assert!(!verify_signature(&Affine::INFINITY, &FIXTURE_SIG, &fixture_message()));
    assert_eq!(
        check_signature(&Affine::INFINITY, &FIXTURE_SIG, &fixture_message()),
        Err(SignatureError::PublicKeyAtInfinity)
    );
}

#[test]
fn test_key_checks_run_before_scalar_checks() {
    let zero = [0u8; SIG_SIZE];
    let off_curve = Affine::new(BaseField::ONE, BaseField::ONE);
    assert_eq!(
        check_signature(&off_curve, &zero, &[]),
        Err(SignatureError::PublicKeyNotOnCurve)
    );
    assert_eq!(
        check_signature(&Affine::INFINITY, &zero, &[]),
        Err(SignatureError::PublicKeyAtInfinity)
    );
}

#[test]
fn test_commitment_at_infinity_rejected() {
    // pk = G, s = 1, e = q - 1: R = G + (q - 1)G = O
    let mut q_minus_one = ScalarField::MODULUS;
    q_minus_one[0] -= 1;

    let mut sig = [0u8; SIG_SIZE];
    sig[31] = 1;
    for (i, limb) in q_minus_one.iter().rev().enumerate() {
        sig[32 + i * 8..32 + (i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
    }

    let (r_is_infinity, _) = compute_challenge(
        &Affine::GENERATOR,
        &decode_scalar(&sig, 0),
        &decode_scalar(&sig, 32),
        b"msg",
    );
    assert!(r_is_infinity);
    assert_eq!(
        check_signature(&Affine::GENERATOR, &sig, b"msg"),
        Err(SignatureError::CommitmentAtInfinity)
    );
}

#[test]
#[should_panic(expected = "invalid signature: signature response scalar is zero")]
fn test_assert_panics_on_zero_signature() {
    assert_valid_signature(&fixture_key(), &[0u8; SIG_SIZE], &[2u8; 64]);
}

#[test]
#[should_panic(expected = "challenge mismatch at byte")]
fn test_assert_panics_on_tampered_message() {
    assert_valid_signature(&fixture_key(), &FIXTURE_SIG, b"not the signed message");
}

#[test]
fn test_decode_is_deterministic() {
    let a = decode_scalar(&FIXTURE_SIG, 0);
    let b = decode_scalar(&FIXTURE_SIG, 0);
    assert_eq!(a, b);
    assert_eq!(a.to_be_bytes()[..], FIXTURE_SIG[..32]);
    assert!(decode_scalar(&[0u8; SIG_SIZE], 32).is_zero());

    let sig = Signature::from_bytes(FIXTURE_SIG);
    assert_eq!(sig.response(), a);
    assert_eq!(sig.challenge(), decode_scalar(&FIXTURE_SIG, 32));
    assert_eq!(sig.challenge_bytes(), &FIXTURE_SIG[32..]);
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let msg = b"hello schnorr";

    let sig = sk.sign(&mut rng, msg);
    assert!(pk.verify(msg, &sig));
    assert_eq!(pk.check(msg, &sig), Ok(()));
}

#[test]
fn test_sign_verify_many_lengths() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0usize, 1, 31, 32, 33, 64, 200] {
        let sk = SigningKey::random(&mut rng);
        let pk = sk.verifying_key();
        let msg: Vec<u8> = (0..len).map(|i| (i * 13) as u8).collect();

        let sig = sk.sign(&mut rng, &msg);
        assert!(verify_signature(pk.point(), sig.as_bytes(), &msg), "length {len}");
    }
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg = [21u8, 22, 23];
    let sig = sk.sign(&mut rng, &msg);

    let wrong_pk = SigningKey::random(&mut rng).verifying_key();
    assert!(!wrong_pk.verify(&msg, &sig));
}

#[test]
fn test_negated_key_rejected() {
    let sk = SigningKey::from_scalar(ScalarField::from_canonical_u64(123_456_789));
    let mut rng = StdRng::seed_from_u64(1);
    let msg = b"negation";
    let sig = sk.sign(&mut rng, msg);

    let pk = *sk.verifying_key().point();
    assert!(verify_signature(&pk, sig.as_bytes(), msg));
    assert!(!verify_signature(&-pk, sig.as_bytes(), msg));
}

#[test]
fn test_alternative_hasher_changes_challenge() {
    let pk = fixture_key();
    let shifted = SchnorrVerifier::new(PedersenHasher::new(1), Blake2sHasher);
    let sig_s = decode_scalar(&FIXTURE_SIG, 0);
    let sig_e = decode_scalar(&FIXTURE_SIG, 32);

    let (_, default_challenge) = compute_challenge(&pk, &sig_s, &sig_e, &fixture_message());
    let (_, shifted_challenge) = shifted.compute_challenge(&pk, &sig_s, &sig_e, &fixture_message());
    assert_ne!(default_challenge, shifted_challenge);
    assert!(!shifted.verify(&pk, &FIXTURE_SIG, &fixture_message()));
}

#[test]
fn test_concurrent_verification() {
    let pk = fixture_key();
    let msg = fixture_message();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let msg = &msg;
                scope.spawn(move || {
                    let mut sig = FIXTURE_SIG;
                    if i % 2 == 1 {
                        sig[i] ^= 1;
                    }
                    (i, verify_signature(&pk, &sig, msg))
                })
            })
            .collect();

        for handle in handles {
            let (i, ok) = handle.join().expect("verifier thread panicked");
            assert_eq!(ok, i % 2 == 0);
        }
    });
}

#[test]
fn test_verifying_key_validity() {
    assert!(VerifyingKey::new(fixture_key()).is_valid());
    assert!(!VerifyingKey::new(Affine::INFINITY).is_valid());
    assert!(!VerifyingKey::from_coordinates(BaseField::ONE, BaseField::ONE).is_valid());

    let key = VerifyingKey::from(fixture_key());
    assert_eq!(Affine::from(key), fixture_key());
    assert!(key.verify(&fixture_message(), &Signature::from(FIXTURE_SIG)));
}
