pub mod attack;
pub mod machine;
