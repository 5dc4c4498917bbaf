use ark_bls12_381::Bls12_381;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mimc::BENCHMARK_MIMC_ROUNDS;
use nizkp_benchmark::{
    groth16::{prove, run_groth16, setup, verify},
    BenchmarkConfig, MiMCInstance,
};
use nizkp_utils::r1cs_utils::circuit_shape;

fn mimc_benchmark(c: &mut Criterion) {
    let config = BenchmarkConfig {
        mimc_rounds: BENCHMARK_MIMC_ROUNDS,
        ..BenchmarkConfig::default()
    };
    // One instance from the fixed seed is shared by every step
    let mut rng = config.rng();
    let instance = MiMCInstance::new_random(&mut rng, config.mimc_rounds);
    let setup_circuit = instance.setup_circuit().unwrap();
    let circuit = instance.circuit().unwrap();
    let public_inputs = circuit.public_inputs().unwrap();

    let metrics = run_groth16::<Bls12_381, _, _>(
        setup_circuit.clone(),
        circuit.clone(),
        &public_inputs,
        &mut rng,
    )
    .unwrap();
    println!("MiMC with {} rounds\n{}", config.mimc_rounds, metrics);

    let (pk, pvk) = setup::<Bls12_381, _, _>(setup_circuit.clone(), &mut rng).unwrap();
    let proof = prove(&pk, circuit.clone(), &mut rng).unwrap();

    let mut group = c.benchmark_group("MiMC Groth16");
    group.sample_size(10);
    group.bench_function("compile", |b| {
        b.iter(|| black_box(circuit_shape(setup_circuit.clone()).unwrap()))
    });
    group.bench_function("setup", |b| {
        b.iter(|| black_box(setup::<Bls12_381, _, _>(setup_circuit.clone(), &mut rng).unwrap()))
    });
    let mut prove_rng = config.rng();
    group.bench_function("prove", |b| {
        b.iter(|| black_box(prove(&pk, circuit.clone(), &mut prove_rng).unwrap()))
    });
    group.bench_function("verify", |b| {
        b.iter(|| verify(black_box(&pvk), black_box(&proof), black_box(&public_inputs)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, mimc_benchmark);
criterion_main!(benches);
