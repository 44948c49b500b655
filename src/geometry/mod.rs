pub mod lattice;

pub use lattice::{SquareLattice, N_NEIGHBORS};
