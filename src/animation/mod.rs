/// Phase-ordered frame assembly.
pub mod assembler;
