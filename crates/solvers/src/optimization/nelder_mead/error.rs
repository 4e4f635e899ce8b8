use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

use super::{ConfigError, SimplexError};

/// Errors that can occur during Nelder-Mead minimization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("a simplex needs at least 2 vertices, got {dimension}")]
    InvalidDimension { dimension: usize },

    #[error("expected {expected} start points, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("start point {index} has {found} coordinates, expected {expected}")]
    TypeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Simplex(#[from] SimplexError),

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use crate::optimization::nelder_mead::Config;

    fn configure(tolerance: f64) -> Result<Config, Error> {
        let config = Config::new(tolerance, 10)?.with_contraction_factor(0.25)?;
        Ok(config)
    }

    #[test]
    fn config_errors_convert_with_question_mark() {
        assert!(configure(1e-3).is_ok());

        let err = configure(0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ConfigError::Tolerance)));
        assert_eq!(
            err.to_string(),
            "invalid config: tolerance must be finite and positive"
        );
    }

    #[derive(Debug)]
    struct Crashed;

    impl fmt::Display for Crashed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("crashed")
        }
    }

    impl StdError for Crashed {}

    #[test]
    fn eval_errors_keep_their_source() {
        let err = Error::from(EvalError::<Crashed, Crashed>::Model(Crashed));
        assert!(matches!(err, Error::Model(_)));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("crashed"));

        let err = Error::from(EvalError::<Crashed, Crashed>::Problem(Crashed));
        assert!(matches!(err, Error::Problem(_)));
        assert_eq!(err.to_string(), "problem error");
    }
}
