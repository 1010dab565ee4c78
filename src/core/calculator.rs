use crate::core::formatter::derive;
use crate::domain::model::{FormatterResult, NumericInputPair};

/// Calculator panel state. Every edit recomputes the result immediately.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    inputs: NumericInputPair,
    result: FormatterResult,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_inputs(NumericInputPair::default())
    }

    pub fn with_inputs(inputs: NumericInputPair) -> Self {
        let result = derive(&inputs.text1, &inputs.text2);
        Self { inputs, result }
    }

    pub fn set_first(&mut self, text: impl Into<String>) -> FormatterResult {
        self.inputs.text1 = text.into();
        self.recompute()
    }

    pub fn set_second(&mut self, text: impl Into<String>) -> FormatterResult {
        self.inputs.text2 = text.into();
        self.recompute()
    }

    pub fn clear(&mut self) -> FormatterResult {
        self.inputs.clear();
        self.recompute()
    }

    pub fn inputs(&self) -> &NumericInputPair {
        &self.inputs
    }

    pub fn result(&self) -> FormatterResult {
        self.result
    }

    pub fn result_text(&self) -> String {
        self.result.to_string()
    }

    fn recompute(&mut self) -> FormatterResult {
        self.result = derive(&self.inputs.text1, &self.inputs.text2);
        tracing::trace!(result = ?self.result, "calculator result recomputed");
        self.result
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}
