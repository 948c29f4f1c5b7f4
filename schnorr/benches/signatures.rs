use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curve::{Affine, BaseField, generator_table};
use schnorr::{compute_challenge, decode_scalar, verify_signature};

const SIGNATURE: [u8; 64] = [
    1, 13, 119, 112, 212, 39, 233, 41, 84, 235, 255, 93, 245, 172, 186, 83, 157, 253, 76, 77, 33,
    128, 178, 15, 214, 67, 105, 107, 177, 234, 77, 48, 27, 237, 155, 84, 39, 84, 247, 27, 22, 8,
    176, 230, 24, 115, 145, 220, 254, 122, 135, 179, 171, 4, 214, 202, 64, 199, 19, 84, 239, 138,
    124, 12,
];

fn fixture_key() -> Affine {
    let field = |s: &str| {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).expect("valid hex");
        BaseField::from_be_bytes(&bytes)
    };
    Affine::new(
        field("04b260954662e97f00cab9adb773a259097f7a274b83b113532bce27fa3fb96a"),
        field("2fd51571db6c08666b0edfbfbc57d432068bccd0110a39b166ab243da0037197"),
    )
}

fn bench_verify(c: &mut Criterion) {
    generator_table();
    let pk = fixture_key();
    let msg: Vec<u8> = (0u8..10).collect();

    c.bench_function("schnorr_verify", |bencher| {
        bencher.iter(|| {
            let ok = verify_signature(black_box(&pk), black_box(&SIGNATURE), black_box(&msg));
            black_box(ok);
        })
    });
}

fn bench_compute_challenge(c: &mut Criterion) {
    generator_table();
    let pk = fixture_key();
    let msg: Vec<u8> = (0u8..10).collect();
    let sig_s = decode_scalar(&SIGNATURE, 0);
    let sig_e = decode_scalar(&SIGNATURE, 32);

    c.bench_function("schnorr_compute_challenge", |bencher| {
        bencher.iter(|| black_box(compute_challenge(&pk, &sig_s, &sig_e, black_box(&msg))))
    });
}

criterion_group!(benches, bench_verify, bench_compute_challenge);
criterion_main!(benches);
