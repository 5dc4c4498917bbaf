use crate::{
    config::BenchmarkConfig, error::BenchmarkError, groth16::run_groth16, metrics::Groth16Metrics,
};
use ark_bls12_381::{Bls12_381, Fr};
use ark_std::rand::{CryptoRng, RngCore};
use mimc::{MiMCCircuit, RoundConstants};
use test_utils::mimc_preimage;

/// Public round constants and a preimage with its image, over the BLS12-381 scalar field
#[derive(Clone, Debug)]
pub struct MiMCInstance {
    pub constants: RoundConstants<Fr>,
    pub xl: Fr,
    pub xr: Fr,
    pub image: Fr,
}

impl MiMCInstance {
    /// Fresh round constants and preimage on every call
    pub fn new_random<R: RngCore>(rng: &mut R, rounds: usize) -> Self {
        let constants = RoundConstants::new_random(rng, rounds);
        let (xl, xr, image) = mimc_preimage(rng, &constants);
        Self {
            constants,
            xl,
            xr,
            image,
        }
    }

    pub fn setup_circuit(&self) -> Result<MiMCCircuit<Fr>, BenchmarkError> {
        Ok(MiMCCircuit::new(
            self.constants.rounds(),
            self.constants.clone(),
            None,
            None,
            None,
        )?)
    }

    pub fn circuit(&self) -> Result<MiMCCircuit<Fr>, BenchmarkError> {
        Ok(MiMCCircuit::new(
            self.constants.rounds(),
            self.constants.clone(),
            Some(self.xl),
            Some(self.xr),
            Some(self.image),
        )?)
    }
}

/// Prove knowledge of a MiMC preimage with Groth16 over BLS12-381
pub fn run_mimc<R: RngCore + CryptoRng>(
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<Groth16Metrics, BenchmarkError> {
    let instance = MiMCInstance::new_random(rng, config.mimc_rounds);
    let circuit = instance.circuit()?;
    let public_inputs = circuit.public_inputs()?;
    run_groth16::<Bls12_381, _, _>(instance.setup_circuit()?, circuit, &public_inputs, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn instance() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let instance = MiMCInstance::new_random(&mut rng, 20);
        assert_eq!(instance.constants.rounds(), 20);
        assert_eq!(mimc::mimc(instance.xl, instance.xr, &instance.constants), instance.image);
        instance.circuit().unwrap().is_solved().unwrap();

        // Every call draws new constants
        let other = MiMCInstance::new_random(&mut rng, 20);
        assert_ne!(instance.constants, other.constants);
    }

    #[test]
    fn run() {
        let config = BenchmarkConfig {
            mimc_rounds: 30,
            ..BenchmarkConfig::default()
        };
        let metrics = run_mimc(&config, &mut config.rng()).unwrap();
        assert_eq!(metrics.shape.num_constraints, 2 * 30 + 1);
        // Round constants and the image
        assert_eq!(metrics.shape.num_instance_variables, 1 + 30 + 1);
        println!("{}", metrics);
    }
}
