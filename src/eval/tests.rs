#[cfg(test)]
mod tests {
    use crate::eval::*;
    use crate::value::Number;

    fn eval_str(input: &str) -> Result<Option<Number>, EvalError> {
        let mut calc = Calculator::new();
        calc.evaluate(input)
    }

    fn approx(value: Option<Number>, expected: f64, tolerance: f64) -> bool {
        value.map_or(false, |v| (v.to_f64() - expected).abs() <= tolerance)
    }

    fn stack_strings(calc: &Calculator) -> Vec<String> {
        calc.stack().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn eval_basic_arithmetic() {
        assert_eq!(eval_str("2 5 +").unwrap(), Some(Number::from(7)));
        assert_eq!(eval_str("10 5 -").unwrap(), Some(Number::from(5)));
        assert_eq!(eval_str("10 5 *").unwrap(), Some(Number::from(50)));
        assert_eq!(eval_str("10 5 /").unwrap(), Some(Number::from(2)));
    }

    #[test]
    fn eval_operand_order() {
        assert_eq!(eval_str("5 10 -").unwrap(), Some(Number::from(-5)));
        assert_eq!(eval_str("1 4 /").unwrap(), Some(Number::from(0.25)));
        assert_eq!(eval_str("2 10 pow").unwrap(), Some(Number::from(1024)));
    }

    #[test]
    fn eval_integer_results_stay_exact() {
        let r = eval_str("0x10 3 *").unwrap().unwrap();
        assert!(r.is_int());
        assert_eq!(r.to_string(), "48");

        let r = eval_str("99999999999999999999 1 +").unwrap().unwrap();
        assert_eq!(r.to_string(), "100000000000000000000");
    }

    #[test]
    fn eval_division_is_float() {
        let r = eval_str("10 5 /").unwrap().unwrap();
        assert!(!r.is_int());
        assert_eq!(r.to_string(), "2.0");
    }

    #[test]
    fn eval_division_by_zero() {
        let r = eval_str("1 0 /").unwrap().unwrap();
        assert_eq!(r.to_f64(), f64::INFINITY);
        let r = eval_str("0 0.0 /").unwrap().unwrap();
        assert!(r.to_f64().is_nan());
    }

    #[test]
    fn eval_square_sqrt_round_trip() {
        assert!(approx(eval_str("2 square sqrt").unwrap(), 2.0, 1e-12));
        assert!(approx(eval_str("2 sq sqrt").unwrap(), 2.0, 1e-12));
        assert!(approx(eval_str("1.5 sq sqrt").unwrap(), 1.5, 1e-12));
    }

    #[test]
    fn eval_circle_area() {
        assert!(approx(eval_str("2 sq pi *").unwrap(), 12.56, 0.5));
    }

    #[test]
    fn eval_last_token_decides_result() {
        assert_eq!(eval_str("").unwrap(), None);
        assert_eq!(eval_str("   ").unwrap(), None);
        assert_eq!(eval_str("3").unwrap(), None);
        assert_eq!(eval_str("2 5 + 3").unwrap(), None);
        assert_eq!(eval_str("2 5 + dup").unwrap(), None);
        assert_eq!(eval_str("pi").unwrap(), None);
    }

    #[test]
    fn eval_echo_literals() {
        let mut calc = Calculator::new();
        calc.set_echo_literals(true);
        assert_eq!(calc.evaluate("3").unwrap(), Some(Number::from(3)));
        assert!(approx(calc.evaluate("pi").unwrap(), std::f64::consts::PI, 0.0));
        assert_eq!(calc.evaluate("clear").unwrap(), None);
    }

    #[test]
    fn eval_stack_persists_between_lines() {
        let mut calc = Calculator::new();
        calc.evaluate("2").unwrap();
        calc.evaluate("5").unwrap();
        assert_eq!(calc.evaluate("+").unwrap(), Some(Number::from(7)));
        assert_eq!(calc.evaluate("c").unwrap(), None);
        assert_eq!(calc.depth(), 0);
    }

    #[test]
    fn eval_literal_kinds() {
        let mut calc = Calculator::new();
        calc.exec("3").unwrap();
        calc.exec("2.5").unwrap();
        assert_eq!(stack_strings(&calc), ["3", "2.5"]);
        calc.clear_stack();
        calc.exec("0x10").unwrap();
        calc.exec(".1e2").unwrap();
        assert!(matches!(
            calc.exec("gurka"),
            Err(EvalError::UnknownOperation(_))
        ));
        assert_eq!(stack_strings(&calc), ["16", "10.0"]);
        assert_eq!(calc.exec("+").unwrap(), Some(Number::from(26)));
    }

    #[test]
    fn eval_unknown_operation_names_token() {
        let err = eval_str("gurka").unwrap_err();
        assert_eq!(err, EvalError::UnknownOperation("gurka".into()));
        assert!(err.to_string().contains("gurka"));
    }

    #[test]
    fn eval_error_aborts_rest_of_line() {
        let mut calc = Calculator::new();
        let err = calc.evaluate("1 2 bogus 3 4").unwrap_err();
        assert_eq!(err, EvalError::UnknownOperation("bogus".into()));
        assert_eq!(stack_strings(&calc), ["1", "2"]);
    }

    #[test]
    fn eval_underflow_keeps_earlier_pops() {
        let mut calc = Calculator::new();
        calc.push(Number::from(1));
        let err = calc.evaluate("+").unwrap_err();
        assert_eq!(err, EvalError::EmptyStack("+".into()));
        assert_eq!(calc.depth(), 0);

        calc.push(Number::from(1));
        calc.push(Number::from(2));
        assert_eq!(stack_strings(&calc), ["1", "2"]);
        assert_eq!(calc.evaluate("+").unwrap(), Some(Number::from(3)));
    }

    #[test]
    fn eval_empty_stack_errors() {
        for line in ["pop", "p", "dup", "swap", "+", "-", "*", "/", "sq", "sqrt", "sin", "ln", "exp"] {
            assert!(
                matches!(eval_str(line), Err(EvalError::EmptyStack(_))),
                "{} should underflow",
                line
            );
        }
        assert_eq!(eval_str("clear").unwrap(), None);
    }

    #[test]
    fn eval_stack_ops() {
        let mut calc = Calculator::new();
        calc.evaluate("1 2 swap").unwrap();
        assert_eq!(stack_strings(&calc), ["2", "1"]);
        calc.evaluate("duplicate").unwrap();
        assert_eq!(stack_strings(&calc), ["2", "1", "1"]);
        calc.evaluate("pop w").unwrap();
        assert_eq!(stack_strings(&calc), ["1", "2"]);
        calc.evaluate("d").unwrap();
        assert_eq!(stack_strings(&calc), ["1", "2", "2"]);
    }

    #[test]
    fn eval_chained_division() {
        let mut calc = Calculator::new();
        calc.evaluate("10 dup 5").unwrap();
        assert_eq!(calc.evaluate("/").unwrap(), Some(Number::from(2)));
        assert_eq!(calc.evaluate("/").unwrap(), Some(Number::from(5)));
    }

    #[test]
    fn eval_alias_x_multiplies() {
        assert_eq!(eval_str("6 7 x").unwrap(), Some(Number::from(42)));
    }

    #[test]
    fn eval_angle_mode_is_consulted() {
        let mut calc = Calculator::new();
        assert_eq!(calc.angle_mode(), AngleMode::Radians);
        assert!(approx(calc.evaluate("90 sin").unwrap(), 0.894, 1e-3));

        calc.set_angle_mode(AngleMode::Degrees);
        assert!(approx(calc.evaluate("90 sin").unwrap(), 1.0, 1e-12));
        assert!(approx(calc.evaluate("1 asin").unwrap(), 90.0, 1e-9));
        assert!(approx(calc.evaluate("60 cos").unwrap(), 0.5, 1e-12));
        assert!(approx(calc.evaluate("1 atan").unwrap(), 45.0, 1e-9));
    }

    #[test]
    fn eval_angle_mode_operations() {
        let mut calc = Calculator::new();
        assert_eq!(calc.evaluate("deg").unwrap(), None);
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
        assert!(approx(calc.evaluate("30 sin").unwrap(), 0.5, 1e-12));
        calc.evaluate("rad").unwrap();
        assert_eq!(calc.angle_mode(), AngleMode::Radians);
        assert!(approx(calc.evaluate("0.5 asin").unwrap(), 0.5235987755982989, 1e-12));
    }

    #[test]
    fn eval_domain_errors() {
        assert!(matches!(eval_str("-1 sqrt"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("2 asin"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("-1.5 acos"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("0 ln"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("-3 ln"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("-8 0.5 pow"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_str("0 -1 pow"), Err(EvalError::Domain { .. })));
    }

    #[test]
    fn eval_domain_error_pops_operand() {
        let mut calc = Calculator::new();
        let err = calc.evaluate("4 -1 sqrt").unwrap_err();
        assert_eq!(err.to_string(), "Math domain error: sqrt(-1.0)");
        assert_eq!(stack_strings(&calc), ["4"]);
    }

    #[test]
    fn eval_transcendentals() {
        assert!(approx(eval_str("1 exp").unwrap(), std::f64::consts::E, 1e-12));
        assert!(approx(eval_str("e ln").unwrap(), 1.0, 1e-12));
        assert!(approx(eval_str("2 0.5 pow").unwrap(), std::f64::consts::SQRT_2, 1e-12));
        assert!(approx(eval_str("0 sqrt").unwrap(), 0.0, 0.0));
    }

    #[test]
    fn eval_constants() {
        let mut calc = Calculator::new();
        calc.define_constant("g", Number::from(9.81)).unwrap();
        calc.define_constant("dozen", Number::from(12)).unwrap();
        assert_eq!(calc.evaluate("g").unwrap(), None);
        assert_eq!(calc.evaluate("dozen *").unwrap(), Some(Number::from(9.81 * 12.0)));
        assert_eq!(calc.constant_names().collect::<Vec<_>>(), ["dozen", "g"]);
    }

    #[test]
    fn eval_constants_cannot_shadow() {
        let mut calc = Calculator::new();
        for name in ["pi", "+", "sq", "12", "0x1", "1e3", "", "two words"] {
            assert_eq!(
                calc.define_constant(name, Number::from(1)),
                Err(EvalError::ReservedName(name.to_string())),
                "{:?} should be reserved",
                name
            );
        }
    }

    #[test]
    fn eval_instances_are_independent() {
        let mut a = Calculator::new();
        let mut b = Calculator::new();
        a.evaluate("1 2 3 deg").unwrap();
        assert_eq!(b.depth(), 0);
        assert_eq!(b.angle_mode(), AngleMode::Radians);
        b.evaluate("4").unwrap();
        assert_eq!(a.depth(), 3);
    }

    #[test]
    fn eval_top_and_pop() {
        let mut calc = Calculator::new();
        assert!(matches!(calc.top(), Err(EvalError::EmptyStack(_))));
        assert!(matches!(calc.pop(), Err(EvalError::EmptyStack(_))));
        calc.evaluate("1 2").unwrap();
        assert_eq!(*calc.top().unwrap(), Number::from(2));
        assert_eq!(calc.pop().unwrap(), Number::from(2));
        assert_eq!(calc.depth(), 1);
    }
}
