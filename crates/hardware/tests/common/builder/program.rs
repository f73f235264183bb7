use crtsim_core::isa::Instruction;
use crtsim_core::sim::Program;

/// Assembles a program one instruction at a time.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn noop(mut self) -> Self {
        self.instructions.push(Instruction::Noop);
        self
    }

    pub fn noops(mut self, n: usize) -> Self {
        self.instructions
            .extend(std::iter::repeat_n(Instruction::Noop, n));
        self
    }

    pub fn addx(mut self, delta: i64) -> Self {
        self.instructions.push(Instruction::Addx(delta));
        self
    }

    pub fn build(self) -> Program {
        Program::new(self.instructions)
    }

    /// Renders the program back to source text, one instruction per line.
    pub fn source(&self) -> String {
        self.instructions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
