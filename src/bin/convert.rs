//! Command line program converting LBM snapshots into text matrices.

#[quit::main]
fn main() {
    lbmcheck::cli::convert::run();
}
