pub mod admit;
pub mod net;
pub mod report;
pub mod route;
pub mod scenario;
pub mod topo;

#[cfg(test)]
mod test;
