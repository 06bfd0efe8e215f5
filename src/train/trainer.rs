use log::debug;

use crate::error::NetworkError;
use crate::loss::mse::MseLoss;
use crate::network::network::FeedforwardNetwork;

/// Runs `epochs` passes of single-sample training over `samples` and
/// returns the mean MSE of the last epoch.
///
/// Each sample is an (input, target) pair; updates are applied after every
/// sample (online SGD, no batching). Per-epoch loss is logged at debug
/// level.
pub fn train_epochs(
    network: &mut FeedforwardNetwork,
    samples: &[(Vec<f64>, Vec<f64>)],
    epochs: usize,
) -> Result<f64, NetworkError> {
    if samples.is_empty() {
        return Ok(0.0);
    }

    let mut last_loss = 0.0;

    for epoch in 1..=epochs {
        let mut total_loss = 0.0;

        for (inputs, targets) in samples {
            let pass = network.forward(inputs)?;
            total_loss += MseLoss::loss(&pass.output, targets);
            network.train(inputs, targets)?;
        }

        last_loss = total_loss / samples.len() as f64;
        debug!("epoch {epoch}/{epochs}: mean loss = {last_loss:.6}");
    }

    Ok(last_loss)
}
