// Tic-tac-toe demo driver.
// All neural network logic lives in the library (src/lib.rs and its modules);
// this binary only feeds it a fixed board encoding and renders the results.

use nanomlp::{FeedforwardNetwork, NetworkConfig};

/// Renders a 3x3 tic-tac-toe board.
fn print_board(board: &[char; 9]) {
    println!("  {} | {} | {}", board[0], board[1], board[2]);
    println!(" -----------");
    println!("  {} | {} | {}", board[3], board[4], board[5]);
    println!(" -----------");
    println!("  {} | {} | {}", board[6], board[7], board[8]);
}

/// Renders a hidden-activation vector as a grid of filled/empty glyphs,
/// one row per board row, using threshold 0.5.
fn print_activation(activation: &[f64]) {
    println!("Neuron activations:");
    for row in activation.chunks(3) {
        for &val in row {
            print!("{} ", if val > 0.5 { '■' } else { '□' });
        }
        println!();
    }
}

fn main() {
    // 3x3 board: 9 inputs, 9 hidden neurons, 9 candidate moves.
    let config = NetworkConfig::new(9, 9, 9, 0.1);
    let mut rng = rand::thread_rng();
    let mut network =
        FeedforwardNetwork::new(config, &mut rng).expect("demo config is valid");

    let board: [char; 9] = [' '; 9];

    // One training pair: X in the center, desired move at cell 5.
    let inputs = vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let targets = vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];

    network
        .train(&inputs, &targets)
        .expect("demo vectors match the configured sizes");

    println!("Initial board:");
    print_board(&board);

    let pass = network
        .forward(&inputs)
        .expect("demo vectors match the configured sizes");

    println!("\nCandidate moves:");
    for (i, score) in pass.output.iter().enumerate() {
        println!("Move {i}: {score}");
    }

    print_activation(&pass.hidden);
}
