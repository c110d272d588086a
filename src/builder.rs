use crate::error::Result;
use crate::offsets::Offsets;
use crate::{CostModel, PathSolver};

/// Configures a [`PathSolver`]; offsets are validated in [`build`](Self::build).
pub struct PathSolverBuilder<M: CostModel> {
    model: M,
    steps: Option<Vec<usize>>,
}

impl<M: CostModel> PathSolverBuilder<M> {
    pub fn new(model: M) -> Self {
        Self { model, steps: None }
    }
    pub fn with_offsets<I>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.steps = Some(steps.into_iter().collect());
        self
    }
    pub fn build(self) -> Result<PathSolver<M>> {
        let offsets = match self.steps {
            Some(steps) => Offsets::new(steps)?,
            None => Offsets::default(),
        };
        Ok(PathSolver::with_offsets(self.model, offsets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, InvalidInput};
    use crate::problems::AbsDiff;

    #[test]
    fn defaults_to_one_and_two() {
        let model = AbsDiff::from_heights(vec![1, 2, 3]).unwrap();
        let solver = PathSolverBuilder::new(model).build().unwrap();
        assert_eq!(solver.offsets().as_slice(), &[1, 2]);
    }

    #[test]
    fn invalid_offsets_fail_at_build() {
        let model = AbsDiff::from_heights(vec![1, 2, 3]).unwrap();
        let err = PathSolverBuilder::new(model)
            .with_offsets([0, 1])
            .build()
            .err();
        assert_eq!(err, Some(Error::InvalidInput(InvalidInput::ZeroOffset)));
    }
}
