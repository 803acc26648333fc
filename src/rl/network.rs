//! Q-value neural network for the Snake DQN agent
//!
//! A small feedforward approximator mapping the 11-feature state vector to
//! one Q-value per discrete action:
//!
//! ```text
//! Input: [batch, 11]
//!   ↓ Linear(11 → 256) + ReLU
//!   ↓ Linear(256 → 3)
//! Output: [batch, 3]  (q_straight, q_right, q_left)
//! ```
//!
//! Parameters are randomly initialized at construction and mutated only by
//! the trainer's gradient step. They persist for the agent's entire
//! lifetime, surviving episode resets.
//!
//! # Example
//!
//! ```rust
//! use snake_dqn::rl::QNetworkConfig;
//! use burn::backend::ndarray::NdArrayDevice;
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//!
//! type Backend = NdArray<f32>;
//!
//! let device = NdArrayDevice::default();
//! let network = QNetworkConfig::new().init::<Backend>(&device);
//!
//! let state = Tensor::zeros([1, 11], &device);
//! let q_values = network.forward(state);
//!
//! assert_eq!(q_values.dims(), [1, 3]);
//! ```

use burn::{
    module::Module,
    nn::{Linear, LinearConfig},
    tensor::{activation::relu, backend::Backend, Tensor},
};

/// Configuration for the Q-network
#[derive(Debug, Clone)]
pub struct QNetworkConfig {
    /// Number of input features (default: 11)
    pub state_dim: usize,

    /// Hidden layer width (default: 256)
    pub hidden_dim: usize,

    /// Number of discrete actions (default: 3)
    pub num_actions: usize,
}

impl QNetworkConfig {
    /// Create a configuration with the default architecture
    pub fn new() -> Self {
        Self {
            state_dim: super::observation::STATE_DIM,
            hidden_dim: 256,
            num_actions: 3,
        }
    }

    /// Initialize a Q-network from this configuration
    pub fn init<B: Backend>(&self, device: &B::Device) -> QNetwork<B> {
        QNetwork {
            layer1: LinearConfig::new(self.state_dim, self.hidden_dim).init(device),
            layer2: LinearConfig::new(self.hidden_dim, self.num_actions).init(device),
        }
    }
}

impl Default for QNetworkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Feedforward Q-value approximator
///
/// Generic over the Burn backend, so the same module runs on the plain
/// NdArray backend for action selection and on the Autodiff wrapper for
/// training.
#[derive(Module, Debug)]
pub struct QNetwork<B: Backend> {
    /// Hidden layer
    layer1: Linear<B>,
    /// Linear output head, one unit per action
    layer2: Linear<B>,
}

impl<B: Backend> QNetwork<B> {
    /// Forward pass: `[batch, 11]` states to `[batch, 3]` Q-values
    pub fn forward(&self, state: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.layer1.forward(state));
        self.layer2.forward(x)
    }
}
