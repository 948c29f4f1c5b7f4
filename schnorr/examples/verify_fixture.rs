use curve::{Affine, BaseField};
use schnorr::{SignatureError, check_signature, verify_signature};

const PK_X: &str = "04b260954662e97f00cab9adb773a259097f7a274b83b113532bce27fa3fb96a";
const PK_Y: &str = "2fd51571db6c08666b0edfbfbc57d432068bccd0110a39b166ab243da0037197";

const SIGNATURE: [u8; 64] = [
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

fn main() {
    tracing_subscriber::fmt::init();

    let public_key = Affine::new(field(PK_X), field(PK_Y));
    let message: Vec<u8> = (0u8..10).collect();

    let ok = verify_signature(&public_key, &SIGNATURE, &message);
    println!("signature over {:?}: {}", message, if ok { "valid" } else { "invalid" });
    assert!(ok);

    let mut tampered = message.clone();
    tampered[0] ^= 1;
    match check_signature(&public_key, &SIGNATURE, &tampered) {
        Err(err @ SignatureError::ChallengeMismatch { .. }) => println!("tampered message: {err}"),
        other => panic!("tampered message not rejected: {other:?}"),
    }
}
