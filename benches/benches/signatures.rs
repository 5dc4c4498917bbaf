use ark_bn254::Bn254;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nizkp_benchmark::{
    groth16::{prove, run_groth16, setup, verify},
    BenchmarkConfig, EdDSAInstance,
};
use nizkp_utils::r1cs_utils::circuit_shape;

fn eddsa_membership_benchmark(c: &mut Criterion) {
    let config = BenchmarkConfig::default();
    let mut rng = config.rng();
    let list_lens = [config.key_list_len, 8, 32];

    let mut group = c.benchmark_group("EdDSA membership Groth16");
    group.sample_size(10);
    for list_len in list_lens {
        // One instance from the fixed seed is shared by every step
        let instance = EdDSAInstance::new_random(&mut rng, list_len).unwrap();
        let setup_circuit = instance.setup_circuit().unwrap();
        let circuit = instance.circuit().unwrap();
        let public_inputs = circuit.public_inputs().unwrap();

        let metrics = run_groth16::<Bn254, _, _>(
            setup_circuit.clone(),
            circuit.clone(),
            &public_inputs,
            &mut rng,
        )
        .unwrap();
        println!("EdDSA membership in a list of {} keys\n{}", list_len, metrics);

        let (pk, pvk) = setup::<Bn254, _, _>(setup_circuit.clone(), &mut rng).unwrap();
        let proof = prove(&pk, circuit.clone(), &mut rng).unwrap();

        group.bench_with_input(
            BenchmarkId::new("compile", list_len),
            &setup_circuit,
            |b, setup_circuit| b.iter(|| black_box(circuit_shape(setup_circuit.clone()).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("setup", list_len),
            &setup_circuit,
            |b, setup_circuit| {
                b.iter(|| black_box(setup::<Bn254, _, _>(setup_circuit.clone(), &mut rng).unwrap()))
            },
        );
        group.bench_with_input(BenchmarkId::new("prove", list_len), &circuit, |b, circuit| {
            b.iter(|| black_box(prove(&pk, circuit.clone(), &mut rng).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("verify", list_len),
            &public_inputs,
            |b, public_inputs| {
                b.iter(|| verify(black_box(&pvk), black_box(&proof), black_box(public_inputs)).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, eddsa_membership_benchmark);
criterion_main!(benches);
