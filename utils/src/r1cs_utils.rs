//! Helpers to run a [`ConstraintSynthesizer`] outside of a proving system: to check whether an
//! assignment satisfies the circuit, to learn the circuit's size and to extract the assignments.

use alloc::{string::String, vec::Vec};
use ark_ff::PrimeField;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal, SynthesisError,
    SynthesisMode,
};
use ark_std::{end_timer, start_timer};

/// Outcome of checking a concrete assignment against the constraints of a circuit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Satisfaction {
    Satisfied,
    /// Contains the name of the first unsatisfied constraint when it is known. It is `None` when the
    /// circuit could already tell during synthesis, like when a condition on constants fails.
    Unsatisfied(Option<String>),
}

impl Satisfaction {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Number of constraints and variables of a circuit. The instance count includes the constant
/// variable `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircuitShape {
    pub num_constraints: usize,
    pub num_instance_variables: usize,
    pub num_witness_variables: usize,
}

/// The public (without the leading `1`) and the private part of a full assignment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignments<F: PrimeField> {
    pub instance: Vec<F>,
    pub witness: Vec<F>,
}

fn new_cs<F: PrimeField>(mode: SynthesisMode) -> ConstraintSystemRef<F> {
    let cs = ConstraintSystem::<F>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(mode);
    cs
}

/// Synthesize the circuit with its assignment and check whether every constraint holds.
/// Errors other than unsatisfiability, like a missing assignment, are returned as errors.
pub fn check_satisfaction<F: PrimeField, C: ConstraintSynthesizer<F>>(
    circuit: C,
) -> Result<Satisfaction, SynthesisError> {
    let cs = new_cs::<F>(SynthesisMode::Prove {
        construct_matrices: true,
    });

    let synthesis_time = start_timer!(|| "Constraint synthesis");
    let synthesized = circuit.generate_constraints(cs.clone());
    end_timer!(synthesis_time);
    match synthesized {
        Ok(()) => (),
        Err(SynthesisError::Unsatisfiable) => return Ok(Satisfaction::Unsatisfied(None)),
        Err(e) => return Err(e),
    }

    let check_time = start_timer!(|| "Checking constraints");
    let satisfied = cs.is_satisfied()?;
    end_timer!(check_time);
    if satisfied {
        Ok(Satisfaction::Satisfied)
    } else {
        Ok(Satisfaction::Unsatisfied(cs.which_is_unsatisfied()?))
    }
}

/// Synthesize the circuit without any assignment. This is the "compile" step of a circuit.
pub fn circuit_shape<F: PrimeField, C: ConstraintSynthesizer<F>>(
    circuit: C,
) -> Result<CircuitShape, SynthesisError> {
    let cs = new_cs::<F>(SynthesisMode::Setup);

    let compile_time = start_timer!(|| "Compiling circuit");
    circuit.generate_constraints(cs.clone())?;
    cs.finalize();
    end_timer!(compile_time);

    Ok(CircuitShape {
        num_constraints: cs.num_constraints(),
        num_instance_variables: cs.num_instance_variables(),
        num_witness_variables: cs.num_witness_variables(),
    })
}

/// Synthesize the circuit with its assignment and return the values of all variables. Does not
/// check the constraints.
pub fn assignments<F: PrimeField, C: ConstraintSynthesizer<F>>(
    circuit: C,
) -> Result<Assignments<F>, SynthesisError> {
    let cs = new_cs::<F>(SynthesisMode::Prove {
        construct_matrices: false,
    });
    circuit.generate_constraints(cs.clone())?;
    let cs = cs.borrow().ok_or(SynthesisError::MissingCS)?;
    Ok(Assignments {
        // Skip the constant `1`
        instance: cs.instance_assignment[1..].to_vec(),
        witness: cs.witness_assignment.clone(),
    })
}
