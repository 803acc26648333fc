//! Backend type aliases and device management
//!
//! This module provides convenient type aliases for the Burn backends used
//! in training and inference, as well as a helper for device selection.
//!
//! NdArray backend is sufficient here: the state vector has 11 features and
//! the approximator a single 256-unit hidden layer, so CPU tensors are more
//! than fast enough.

use burn::backend::{
    ndarray::{NdArray, NdArrayDevice},
    Autodiff,
};

/// Backend type for training (with autodiff)
pub type TrainingBackend = Autodiff<NdArray<f32>>;

/// Backend type for inference (without autodiff)
pub type InferenceBackend = NdArray<f32>;

/// Get the default device for computation
///
/// # Example
///
/// ```rust
/// use snake_dqn::rl::default_device;
///
/// let device = default_device();
/// ```
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}
