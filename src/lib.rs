pub mod err;
pub mod flow;
pub mod metrics;
pub mod net;
pub mod sim;
pub mod topo;
pub mod units;

#[cfg(test)]
mod test;
