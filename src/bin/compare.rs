//! Command line program comparing target and predicted LBM snapshots.

#[quit::main]
fn main() {
    lbmcheck::cli::compare::run();
}
