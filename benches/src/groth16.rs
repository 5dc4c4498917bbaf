//! Runs a circuit through Groth16: compile, setup, prove and verify, measuring each step and the
//! size of what it produces.

use crate::{
    error::BenchmarkError,
    metrics::{Groth16Metrics, SerializedSize, Timings},
};
use ark_ec::pairing::Pairing;
use ark_groth16::{prepare_verifying_key, Groth16, PreparedVerifyingKey, Proof, ProvingKey};
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_snark::SNARK;
use ark_std::{
    end_timer,
    rand::{CryptoRng, RngCore},
    start_timer,
};
use nizkp_utils::r1cs_utils::{assignments, circuit_shape};
use std::time::Instant;

pub fn setup<E: Pairing, C: ConstraintSynthesizer<E::ScalarField>, R: RngCore + CryptoRng>(
    circuit: C,
    rng: &mut R,
) -> Result<(ProvingKey<E>, PreparedVerifyingKey<E>), BenchmarkError> {
    let (pk, vk) = Groth16::<E>::circuit_specific_setup(circuit, rng)?;
    let pvk = prepare_verifying_key(&vk);
    Ok((pk, pvk))
}

pub fn prove<E: Pairing, C: ConstraintSynthesizer<E::ScalarField>, R: RngCore + CryptoRng>(
    pk: &ProvingKey<E>,
    circuit: C,
    rng: &mut R,
) -> Result<Proof<E>, BenchmarkError> {
    Ok(Groth16::<E>::prove(pk, circuit, rng)?)
}

pub fn verify<E: Pairing>(
    pvk: &PreparedVerifyingKey<E>,
    proof: &Proof<E>,
    public_inputs: &[E::ScalarField],
) -> Result<(), BenchmarkError> {
    if Groth16::<E>::verify_proof(pvk, proof, public_inputs)? {
        Ok(())
    } else {
        Err(BenchmarkError::InvalidProof)
    }
}

/// Run all steps once. `setup_circuit` has no assignment and `circuit` has the assignment whose
/// public part is `public_inputs`.
pub fn run_groth16<E, C, R>(
    setup_circuit: C,
    circuit: C,
    public_inputs: &[E::ScalarField],
    rng: &mut R,
) -> Result<Groth16Metrics, BenchmarkError>
where
    E: Pairing,
    C: ConstraintSynthesizer<E::ScalarField> + Clone,
    R: RngCore + CryptoRng,
{
    let run_time = start_timer!(|| "Groth16 run");

    let start = Instant::now();
    let shape = circuit_shape(setup_circuit.clone())?;
    let compile = start.elapsed();

    let start = Instant::now();
    let (pk, pvk) = setup::<E, _, _>(setup_circuit, rng)?;
    let setup_time = start.elapsed();

    let witness = assignments(circuit.clone())?;

    let start = Instant::now();
    let proof = prove(&pk, circuit, rng)?;
    let prove_time = start.elapsed();

    let start = Instant::now();
    verify(&pvk, &proof, public_inputs)?;
    let verify_time = start.elapsed();

    let full_witness = [witness.instance.as_slice(), witness.witness.as_slice()].concat();
    let metrics = Groth16Metrics {
        shape,
        proving_key: SerializedSize::of(&pk)?,
        verifying_key: SerializedSize::of(&pk.vk)?,
        witness: SerializedSize::of(&full_witness)?,
        public_witness: SerializedSize::of(&witness.instance)?,
        proof: SerializedSize::of(&proof)?,
        timings: Timings {
            compile,
            setup: setup_time,
            prove: prove_time,
            verify: verify_time,
        },
    };
    end_timer!(run_time);
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr};
    use ark_ff::One;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use mimc::{MiMCCircuit, RoundConstants};

    #[test]
    fn steps() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let constants = RoundConstants::<Fr>::new_random(&mut rng, 10);
        let setup_circuit = MiMCCircuit::new(10, constants.clone(), None, None, None).unwrap();
        let circuit =
            MiMCCircuit::new_with_preimage(constants, Fr::rand(&mut rng), Fr::rand(&mut rng));
        let public_inputs = circuit.public_inputs().unwrap();

        let (pk, pvk) = setup::<Bls12_381, _, _>(setup_circuit.clone(), &mut rng).unwrap();
        let proof = prove(&pk, circuit.clone(), &mut rng).unwrap();
        verify(&pvk, &proof, &public_inputs).unwrap();

        let mut wrong_inputs = public_inputs.clone();
        *wrong_inputs.last_mut().unwrap() += Fr::one();
        assert!(matches!(
            verify(&pvk, &proof, &wrong_inputs),
            Err(BenchmarkError::InvalidProof)
        ));

        let metrics =
            run_groth16::<Bls12_381, _, _>(setup_circuit, circuit, &public_inputs, &mut rng)
                .unwrap();
        // 2 constraints per round and the image check
        assert_eq!(metrics.shape.num_constraints, 2 * 10 + 1);
        assert_eq!(metrics.public_witness.compressed, 8 + 32 * public_inputs.len());
        // xl and xr and the intermediate values
        assert!(metrics.witness.compressed > metrics.public_witness.compressed);
        // A, C in G1 and B in G2
        assert_eq!(metrics.proof.compressed, 48 + 96 + 48);
        assert_eq!(metrics.proof.uncompressed, 2 * metrics.proof.compressed);
        assert!(metrics.proving_key.compressed > metrics.verifying_key.compressed);
        assert!(metrics.verifying_key.uncompressed > metrics.verifying_key.compressed);
    }
}
