//! # State Transitions
//!
//! Pure functions from `(config, state, event)` to the next state. None of
//! them mutate their input or touch a display; [`CalculatorEngine`] wraps
//! them with the display notification.
//!
//! Any event that arrives while the state is in error first restores the
//! construction defaults and is then applied normally, so the error display
//! never blocks input.
//!
//! [`CalculatorEngine`]: super::CalculatorEngine

use crate::config::EngineConfig;
use crate::errors::CalcError;
use crate::format::{format_display, format_result, number_to_string, parse_number};
use crate::state::{EngineState, Operation, ERROR_TEXT};

use super::input::{Digit, Input};

/// Dispatch an input to its transition.
pub fn apply(config: &EngineConfig, state: &EngineState, input: Input) -> EngineState {
    match input {
        Input::Digit(digit) => input_digit(config, state, digit),
        Input::Decimal => input_decimal(state),
        Input::Operator(op) => set_operation(config, state, op),
        Input::Equals => calculate(config, state),
        Input::Percent => percent(state),
        Input::Delete => delete_last(state),
        Input::Clear => clear(),
    }
}

/// Append a digit, or start a new entry after an operator or result.
///
/// Digits past `max_input_length` are dropped silently.
pub fn input_digit(config: &EngineConfig, state: &EngineState, digit: Digit) -> EngineState {
    let mut next = recover(state);
    let c = digit.as_char();

    if next.should_reset_display {
        next.current_value = c.to_string();
        next.should_reset_display = false;
    } else if next.current_value == "0" {
        next.current_value = c.to_string();
    } else if next.current_value.len() < config.max_input_length {
        next.current_value.push(c);
    }

    next.last_result = None;
    next
}

/// Add a decimal point. A second point in the same entry is a no-op.
pub fn input_decimal(state: &EngineState) -> EngineState {
    let mut next = recover(state);

    if next.should_reset_display {
        next.current_value = "0.".to_string();
        next.should_reset_display = false;
        next.last_result = None;
    } else if !next.current_value.contains('.') {
        next.current_value.push('.');
        next.last_result = None;
    }

    next
}

/// Choose an operator, folding a pending one first when the right operand
/// has been typed (`7 + 3 ×` evaluates `7 + 3` before starting `10 ×`).
///
/// If the folded calculation fails the engine stays in the error state and
/// the new operator is discarded.
pub fn set_operation(config: &EngineConfig, state: &EngineState, op: Operation) -> EngineState {
    let mut next = recover(state);

    if next.operation.is_some() && !next.should_reset_display {
        next = calculate(config, &next);
        if next.is_error {
            return next;
        }
    }

    next.operation = Some(op);
    next.previous_value = next.current_value.clone();
    next.previous_exact = next.last_result;
    next.expression = format!("{} {}", format_display(config, &next.previous_value), op.symbol());
    next.should_reset_display = true;
    next
}

/// Evaluate the pending operation.
///
/// No-op without a pending operator. Failures route to [`on_error`].
pub fn calculate(config: &EngineConfig, state: &EngineState) -> EngineState {
    let mut next = recover(state);

    let Some(op) = next.operation else {
        return next;
    };
    if next.previous_value.is_empty() {
        return next;
    }

    let outcome = match (next.previous_operand(), next.current_operand()) {
        (Some(lhs), Some(rhs)) => op.apply(lhs, rhs),
        _ => Err(CalcError::InvalidResult),
    };

    match outcome {
        Ok(value) => {
            let (text, exact) = format_result(config, value);
            tracing::debug!(
                lhs = %next.previous_value,
                op = %op,
                rhs = %next.current_value,
                result = %text,
                "calculated"
            );

            next.expression = format!(
                "{} {} {} =",
                format_display(config, &next.previous_value),
                op.symbol(),
                format_display(config, &next.current_value)
            );
            next.current_value = text;
            next.last_result = Some(exact);
            next.previous_value.clear();
            next.previous_exact = None;
            next.operation = None;
            next.should_reset_display = true;
            next
        }
        Err(err) => {
            tracing::warn!(
                code = err.error_code(),
                lhs = %next.previous_value,
                op = %op,
                rhs = %next.current_value,
                "calculation failed: {}",
                err
            );
            on_error(&err)
        }
    }
}

/// Divide the current operand by 100. Leaves any pending operation alone.
pub fn percent(state: &EngineState) -> EngineState {
    let mut next = recover(state);

    let Some(value) = next.current_operand() else {
        return next;
    };

    next.current_value = number_to_string(value / 100.0);
    next.last_result = None;
    next.should_reset_display = true;
    next
}

/// Back to construction defaults.
pub fn clear() -> EngineState {
    EngineState::default()
}

/// Drop the last character of the entry, falling back to `0`.
///
/// Characters keep being dropped until the text parses again, so `-5`
/// goes straight to `0` and `1e-7` to `1`.
pub fn delete_last(state: &EngineState) -> EngineState {
    let mut next = recover(state);

    if next.current_value.chars().count() > 1 && next.current_value != "0" {
        next.current_value.pop();
        while !next.current_value.is_empty() && parse_number(&next.current_value).is_none() {
            next.current_value.pop();
        }
        if next.current_value.is_empty() {
            next.current_value = "0".to_string();
        }
    } else {
        next.current_value = "0".to_string();
    }

    next.last_result = None;
    next
}

/// The error display state for a failed calculation.
pub fn on_error(condition: &CalcError) -> EngineState {
    EngineState {
        current_value: ERROR_TEXT.to_string(),
        previous_value: String::new(),
        operation: None,
        expression: condition.to_string(),
        should_reset_display: true,
        is_error: true,
        last_result: None,
        previous_exact: None,
    }
}

fn recover(state: &EngineState) -> EngineState {
    if state.is_error {
        EngineState::default()
    } else {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    fn digit(d: u8) -> Input {
        Input::Digit(Digit::new(d).unwrap())
    }

    fn run(inputs: &[Input]) -> EngineState {
        let config = EngineConfig::default();
        inputs
            .iter()
            .fold(EngineState::default(), |state, input| apply(&config, &state, *input))
    }

    fn type_number(text: &str) -> Vec<Input> {
        text.chars()
            .map(|c| match c {
                '.' => Input::Decimal,
                c => Input::Digit(Digit::try_from(c).unwrap()),
            })
            .collect()
    }

    #[test]
    fn test_leading_zero_replaced() {
        let state = run(&[digit(0), digit(0), digit(7)]);
        assert_eq!(state.current_value, "7");
    }

    #[test]
    fn test_digit_limit() {
        let state = run(&type_number("1234567890123"));
        assert_eq!(state.current_value, "123456789012");
    }

    #[test]
    fn test_decimal_idempotent() {
        let once = run(&[digit(3), Input::Decimal]);
        let twice = run(&[digit(3), Input::Decimal, Input::Decimal]);
        assert_eq!(once.current_value, "3.");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_decimal_after_operator() {
        let state = run(&[digit(4), Input::Operator(Operation::Add), Input::Decimal, digit(5)]);
        assert_eq!(state.current_value, "0.5");
        assert_eq!(state.previous_value, "4");
    }

    #[test]
    fn test_set_operation_expression() {
        let state = run(&[digit(1), digit(2), Input::Operator(Operation::Add)]);
        assert_eq!(state.expression, "12 +");
        assert_eq!(state.previous_value, "12");
        assert_eq!(state.phase(), Phase::OperatorPending);
    }

    #[test]
    fn test_operator_replacement_does_not_fold() {
        let state = run(&[
            digit(6),
            Input::Operator(Operation::Add),
            Input::Operator(Operation::Multiply),
        ]);
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.previous_value, "6");
        assert_eq!(state.expression, "6 ×");
    }

    #[test]
    fn test_chained_operators() {
        let state = run(&[
            digit(7),
            Input::Operator(Operation::Add),
            digit(3),
            Input::Operator(Operation::Multiply),
        ]);
        assert_eq!(state.previous_value, "10");
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.expression, "10 ×");

        let config = EngineConfig::default();
        let state = apply(&config, &state, digit(2));
        let state = apply(&config, &state, Input::Equals);
        assert_eq!(state.current_value, "20");
        assert_eq!(state.expression, "10 × 2 =");
    }

    #[test]
    fn test_calculate_without_operation_is_noop() {
        let before = run(&[digit(5)]);
        let after = calculate(&EngineConfig::default(), &before);
        assert_eq!(after, before);
    }

    #[test]
    fn test_rounding_artifacts_suppressed() {
        let mut inputs = type_number("0.1");
        inputs.push(Input::Operator(Operation::Add));
        inputs.extend(type_number("0.2"));
        inputs.push(Input::Equals);
        let state = run(&inputs);
        assert_eq!(state.current_value, "0.3");
        assert_eq!(state.expression, "0.1 + 0.2 =");
        assert_eq!(state.phase(), Phase::Result);
    }

    #[test]
    fn test_divide_by_zero() {
        let state = run(&[
            digit(5),
            Input::Operator(Operation::Divide),
            digit(0),
            Input::Equals,
        ]);
        assert_eq!(state.current_value, "Error");
        assert_eq!(state.expression, "Cannot divide by zero");
        assert!(state.is_error);
        assert_eq!(state.operation, None);
        assert_eq!(state.previous_value, "");
        assert!(state.is_consistent());
    }

    #[test]
    fn test_overflow_is_invalid_result() {
        let mut state = EngineState::default();
        state.previous_value = "1e308".to_string();
        state.operation = Some(Operation::Multiply);
        state.current_value = "10".to_string();
        let state = calculate(&EngineConfig::default(), &state);
        assert!(state.is_error);
        assert_eq!(state.expression, "Invalid calculation");
    }

    #[test]
    fn test_unscalable_result_falls_back_to_scientific() {
        // Built directly; validation would refuse this threshold
        let config = EngineConfig {
            scientific_threshold: 1e300,
            ..EngineConfig::default()
        };
        let mut state = EngineState::default();
        state.previous_value = "1e+299".to_string();
        state.operation = Some(Operation::Multiply);
        state.current_value = "5".to_string();

        let state = calculate(&config, &state);
        assert!(!state.is_error);
        assert_eq!(state.current_value, "5.00000e+299");
        assert!(state.last_result.is_some_and(f64::is_finite));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_failed_chain_stays_in_error() {
        let state = run(&[
            digit(5),
            Input::Operator(Operation::Divide),
            digit(0),
            Input::Operator(Operation::Add),
        ]);
        assert!(state.is_error);
        assert_eq!(state.operation, None);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_any_input_recovers_from_error() {
        let error = on_error(&CalcError::DivideByZero);
        let config = EngineConfig::default();

        let after_digit = apply(&config, &error, digit(4));
        assert_eq!(after_digit.current_value, "4");
        assert!(!after_digit.is_error);
        assert_eq!(after_digit.expression, "");

        let after_delete = apply(&config, &error, Input::Delete);
        assert_eq!(after_delete.current_value, "0");

        let after_decimal = apply(&config, &error, Input::Decimal);
        assert_eq!(after_decimal.current_value, "0.");

        let after_operator = apply(&config, &error, Input::Operator(Operation::Add));
        assert_eq!(after_operator.previous_value, "0");
        assert_eq!(after_operator.expression, "0 +");

        let after_equals = apply(&config, &error, Input::Equals);
        assert_eq!(after_equals, EngineState::default());

        let after_percent = apply(&config, &error, Input::Percent);
        assert_eq!(after_percent.current_value, "0");
        assert!(!after_percent.is_error);
    }

    #[test]
    fn test_percent() {
        let state = run(&[digit(5), digit(0), Input::Percent]);
        assert_eq!(state.current_value, "0.5");
        assert!(state.should_reset_display);
    }

    #[test]
    fn test_percent_keeps_pending_operation() {
        let state = run(&[
            digit(2),
            digit(0),
            digit(0),
            Input::Operator(Operation::Multiply),
            digit(1),
            digit(0),
            Input::Percent,
        ]);
        assert_eq!(state.current_value, "0.1");
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.previous_value, "200");

        let state = apply(&EngineConfig::default(), &state, Input::Equals);
        assert_eq!(state.current_value, "20");
    }

    #[test]
    fn test_clear_restores_defaults() {
        let state = run(&[digit(9), Input::Operator(Operation::Subtract), digit(1), Input::Clear]);
        assert_eq!(state, EngineState::default());
    }

    #[test]
    fn test_delete_last() {
        assert_eq!(run(&[digit(5), Input::Delete]).current_value, "0");
        assert_eq!(run(&[digit(1), digit(2), Input::Delete]).current_value, "1");
        assert_eq!(run(&[Input::Delete]).current_value, "0");
        assert_eq!(run(&[digit(3), Input::Decimal, Input::Delete]).current_value, "3");
    }

    #[test]
    fn test_delete_never_leaves_lone_sign() {
        let mut state = EngineState::default();
        state.current_value = "-5".to_string();
        assert_eq!(delete_last(&state).current_value, "0");

        state.current_value = "1e-7".to_string();
        assert_eq!(delete_last(&state).current_value, "1");
    }

    #[test]
    fn test_scientific_result_keeps_precision() {
        let mut state = EngineState::default();
        state.previous_value = "20000000000000".to_string();
        state.operation = Some(Operation::Add);
        state.current_value = "1.5".to_string();

        let config = EngineConfig::default();
        let state = calculate(&config, &state);
        assert_eq!(state.current_value, "2.00000e+13");
        assert_eq!(state.last_result, Some(20_000_000_000_001.5));

        let state = set_operation(&config, &state, Operation::Subtract);
        let state = apply(&config, &state, digit(1));
        let state = calculate(&config, &state);
        assert_eq!(state.last_result, Some(20_000_000_000_000.5));
    }

    #[test]
    fn test_large_expression_grouped() {
        let mut inputs = type_number("1234567");
        inputs.push(Input::Operator(Operation::Add));
        inputs.push(digit(1));
        inputs.push(Input::Equals);
        let state = run(&inputs);
        assert_eq!(state.current_value, "1234568");
        assert_eq!(state.expression, "1,234,567 + 1 =");
    }
}
