use crate::backend::mathphysics::{Decibel, DecibelMilliwatt, Kilometer};


#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinkMetrics {
    pub signal_distance: Kilometer,
    pub interference_distance: Kilometer,
    pub signal_path_loss: Decibel,
    pub interference_path_loss: Decibel,
    pub jammer_power: DecibelMilliwatt,
    pub sinr: Decibel,
}
