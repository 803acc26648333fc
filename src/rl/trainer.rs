//! Gradient updates for the Q-network
//!
//! This module computes Bellman targets for a batch of transitions and
//! performs one Adam optimizer step on the mean-squared error between the
//! predicted and target Q-values.

use burn::{
    module::AutodiffModule,
    nn::loss::{MseLoss, Reduction},
    optim::{adaptor::OptimizerAdaptor, Adam, AdamConfig, GradientsParams, Optimizer},
    tensor::{
        backend::{AutodiffBackend, Backend},
        ElementConversion, Tensor, TensorData,
    },
};

use super::buffer::Transition;
use super::network::QNetwork;
use super::observation::{StateVec, STATE_DIM};
use crate::game::Turn;

/// Trainer performing temporal-difference updates on a Q-network
///
/// The trainer owns the Adam optimizer state; the network itself is owned
/// by the agent and passed through each [`QTrainer::train_step`] call.
///
/// Two invocation modes share this single entry point: online learning
/// (a batch of exactly one, every tick) and batched learning (transitions
/// sampled from replay memory, once per episode end).
pub struct QTrainer<B: AutodiffBackend> {
    /// Adam optimizer for the Q-network parameters
    optim: OptimizerAdaptor<Adam, QNetwork<B>, B>,

    /// Fixed learning rate
    learning_rate: f64,

    /// Discount factor for future rewards
    gamma: f32,

    /// Device for tensor operations
    device: B::Device,
}

impl<B: AutodiffBackend> QTrainer<B> {
    /// Create a new trainer
    pub fn new(learning_rate: f64, gamma: f32, device: B::Device) -> Self {
        Self {
            optim: AdamConfig::new().init(),
            learning_rate,
            gamma,
            device,
        }
    }

    /// Perform one gradient step on a batch of transitions
    ///
    /// For each transition the Bellman target is `reward` when the step was
    /// terminal, and `reward + gamma * max(Q(next_state))` otherwise. The
    /// next-state estimate uses the current weights in no-grad mode; there
    /// is no separate frozen target network, a known stability trade-off of
    /// this setup. The target overwrites only the Q-value of the action
    /// actually taken in that transition; the remaining entries keep the
    /// predicted values, so they contribute nothing to the loss.
    ///
    /// Returns the updated network and the batch loss. Single epoch, one
    /// optimizer step per call.
    ///
    /// # Panics
    ///
    /// Panics on an empty batch; callers always have at least the current
    /// tick's transition in hand.
    pub fn train_step(&mut self, network: QNetwork<B>, batch: &[Transition]) -> (QNetwork<B>, f32) {
        assert!(!batch.is_empty(), "train_step requires a non-empty batch");

        let n = batch.len();
        let num_actions = Turn::ALL.len();

        let states: Tensor<B, 2> = batch_tensor(batch, |t| &t.state, &self.device);
        let next_states: Tensor<B::InnerBackend, 2> =
            batch_tensor(batch, |t| &t.next_state, &self.device);

        // Q(s) under the training graph.
        let predicted = network.forward(states);

        // max_a' Q(s') with the same weights, no-grad.
        let next_max: Vec<f32> = network
            .valid()
            .forward(next_states)
            .max_dim(1)
            .into_data()
            .to_vec()
            .expect("next-state Q-values to vec");

        // Targets start as a copy of the prediction; only the taken action's
        // entry is replaced by the Bellman value.
        let mut target: Vec<f32> = predicted
            .clone()
            .into_data()
            .to_vec()
            .expect("predicted Q-values to vec");

        for (i, transition) in batch.iter().enumerate() {
            let q_new = if transition.done {
                transition.reward
            } else {
                transition.reward + self.gamma * next_max[i]
            };
            target[i * num_actions + transition.action.index()] = q_new;
        }

        let target: Tensor<B, 2> =
            Tensor::from_data(TensorData::new(target, [n, num_actions]), &self.device);

        let loss = MseLoss::new().forward(predicted, target, Reduction::Mean);
        let loss_value = loss.clone().into_scalar().elem::<f32>();

        let grads = GradientsParams::from_grads(loss.backward(), &network);
        let network = self.optim.step(self.learning_rate, network, grads);

        (network, loss_value)
    }

    /// Discount factor this trainer was configured with
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Learning rate this trainer was configured with
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

/// Stack one state field of every transition into a `[batch, STATE_DIM]`
/// tensor
fn batch_tensor<B: Backend>(
    batch: &[Transition],
    field: impl Fn(&Transition) -> &StateVec,
    device: &B::Device,
) -> Tensor<B, 2> {
    let mut rows = Vec::with_capacity(batch.len() * STATE_DIM);
    for transition in batch {
        rows.extend_from_slice(field(transition));
    }

    Tensor::from_data(TensorData::new(rows, [batch.len(), STATE_DIM]), device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rl::network::QNetworkConfig;
    use crate::rl::observation::to_tensor;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};
    use burn::backend::Autodiff;

    type TestBackend = Autodiff<NdArray<f32>>;

    fn test_state(seed: f32) -> StateVec {
        let mut state = [0.0; STATE_DIM];
        state[0] = seed;
        state[4] = 1.0;
        state
    }

    fn terminal_transition() -> Transition {
        Transition {
            state: test_state(1.0),
            action: Turn::Straight,
            next_state: test_state(0.0),
            reward: -10.0,
            done: true,
        }
    }

    #[test]
    fn test_train_step_returns_finite_loss() {
        let device = NdArrayDevice::default();
        let network = QNetworkConfig::new().init::<TestBackend>(&device);
        let mut trainer = QTrainer::new(1e-3, 0.97, device);

        let (_, loss) = trainer.train_step(network, &[terminal_transition()]);
        assert!(loss.is_finite());
    }

    #[test]
    fn test_repeated_steps_reduce_loss() {
        let device = NdArrayDevice::default();
        let mut network = QNetworkConfig::new().init::<TestBackend>(&device);
        let mut trainer = QTrainer::new(1e-2, 0.97, device);

        let batch = [terminal_transition()];
        let (updated, first_loss) = trainer.train_step(network, &batch);
        network = updated;

        let mut last_loss = first_loss;
        for _ in 0..200 {
            let (updated, loss) = trainer.train_step(network, &batch);
            network = updated;
            last_loss = loss;
        }

        assert!(
            last_loss < first_loss,
            "loss should decrease on a fixed transition: first {}, last {}",
            first_loss,
            last_loss
        );
    }

    #[test]
    fn test_train_step_updates_network() {
        let device = NdArrayDevice::default();
        let network = QNetworkConfig::new().init::<TestBackend>(&device);
        let mut trainer = QTrainer::new(1e-2, 0.97, device.clone());

        let state = test_state(1.0);
        let before: Vec<f32> = network
            .valid()
            .forward(to_tensor(&state, &device))
            .into_data()
            .to_vec()
            .unwrap();

        let (network, _) = trainer.train_step(network, &[terminal_transition()]);

        let after: Vec<f32> = network
            .valid()
            .forward(to_tensor(&state, &device))
            .into_data()
            .to_vec()
            .unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn test_mixed_batch() {
        let device = NdArrayDevice::default();
        let network = QNetworkConfig::new().init::<TestBackend>(&device);
        let mut trainer = QTrainer::new(1e-3, 0.97, device);

        let batch = [
            terminal_transition(),
            Transition {
                state: test_state(0.0),
                action: Turn::TurnRight,
                next_state: test_state(1.0),
                reward: 1.0,
                done: false,
            },
            Transition {
                state: test_state(0.5),
                action: Turn::TurnLeft,
                next_state: test_state(0.5),
                reward: 10.0,
                done: false,
            },
        ];

        let (_, loss) = trainer.train_step(network, &batch);
        assert!(loss.is_finite());
    }

    #[test]
    #[should_panic(expected = "non-empty batch")]
    fn test_empty_batch_panics() {
        let device = NdArrayDevice::default();
        let network = QNetworkConfig::new().init::<TestBackend>(&device);
        let mut trainer = QTrainer::new(1e-3, 0.97, device);

        trainer.train_step(network, &[]);
    }
}
