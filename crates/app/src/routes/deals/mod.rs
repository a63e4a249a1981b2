pub mod detail;
pub mod skeleton;

#[cfg(test)]
mod trace_recorder;
