use burn::{
    nn::{Linear, LinearConfig, Relu},
    prelude::*,
};

/// Number of output logits: index 0 is the negative class, index 1 the positive.
pub const NUM_CLASSES: usize = 2;

// #[derive(Config)] already provides Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct DiseaseClassifierConfig {
    pub input_dim:  usize,
    #[config(default = 16)]
    pub hidden_dim: usize,
}

impl DiseaseClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> DiseaseClassifier<B> {
        let hidden = LinearConfig::new(self.input_dim, self.hidden_dim).init(device);
        let output = LinearConfig::new(self.hidden_dim, NUM_CLASSES).init(device);
        DiseaseClassifier {
            hidden,
            output,
            activation: Relu::new(),
            input_dim:  self.input_dim,
        }
    }
}

/// Feed-forward binary classifier over one tabular feature vector.
#[derive(Module, Debug)]
pub struct DiseaseClassifier<B: Backend> {
    pub hidden:     Linear<B>,
    pub output:     Linear<B>,
    pub activation: Relu,
    pub input_dim:  usize,
}

impl<B: Backend> DiseaseClassifier<B> {
    /// features: [batch, input_dim] → logits: [batch, 2]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.activation.forward(self.hidden.forward(features));
        self.output.forward(x)
    }
}
