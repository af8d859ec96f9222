pub mod linkbudget;
pub mod mathphysics;
pub mod montecarlo;
pub mod scenario;
