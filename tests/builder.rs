use stale_momentum::{
    OptimErr, OptimizerBuilder, OptimizerSpec, State,
    objective::{Beale, Quadratic},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spec(init: &str, momentum: &str, delay: &str, extra: &str) -> OptimizerSpec {
    let json = format!(
        r#"{{
            "variables": ["x", "y"],
            "init": {init},
            "tolerance": 1e-9,
            "learning_rate": 0.01,
            "momentum": {momentum},
            "delay": {delay}{extra}
        }}"#
    );

    OptimizerSpec::from_json(&json).unwrap()
}

#[test]
fn beale_from_json() {
    init_logger();

    let mut spec = spec(
        r#"{ "values": { "values": [1.0, 1.0] } }"#,
        "0.5",
        r#"{ "fixed": { "delay": 2 } }"#,
        "",
    );
    spec.learning_rate = 0.001.into();

    let mut optimizer = OptimizerBuilder::new().build(spec, Beale).unwrap();
    assert_eq!(optimizer.variables(), ["x", "y"]);
    assert_eq!(optimizer.point(), [1., 1.]);
    assert_eq!(optimizer.value_of("y"), Some(1.));
    assert_eq!(optimizer.value_of("z"), None);

    let start = optimizer.evaluate_at(&[1., 1.]).unwrap();
    let report = optimizer.train(2000).unwrap();

    assert!(report.state.is_terminal());
    assert!(report.value < start);
    assert_eq!(optimizer.history().len(), report.steps + 1);
}

#[test]
fn seeded_uniform_start_is_reproducible() {
    let build = || {
        let spec = spec(
            r#"{ "uniform": { "low": -2.0, "high": 2.0 } }"#,
            "[0.9, 0.8]",
            r#"{ "fixed": { "delay": 1 } }"#,
            r#", "seed": 3"#,
        );

        OptimizerBuilder::new()
            .build(spec, Quadratic::centered(vec![1., 1.]))
            .unwrap()
    };

    let first = build();
    let second = build();

    assert_eq!(first.point(), second.point());
    assert!(first.point().iter().all(|x| (-2.0..2.0).contains(x)));
    assert_eq!(first.momentum(), [0.9, 0.8]);
}

#[test]
fn const_start() {
    let spec = spec(
        r#"{ "const": { "value": 0.5 } }"#,
        "0.0",
        r#"{ "fixed": { "delay": 1 } }"#,
        "",
    );

    let optimizer = OptimizerBuilder::new()
        .build(spec, Quadratic::centered(vec![1., 1.]))
        .unwrap();

    assert_eq!(optimizer.point(), [0.5, 0.5]);
    assert_eq!(optimizer.learning_rate(), [0.01, 0.01]);
}

#[test]
fn stochastic_with_decay() {
    init_logger();

    let spec = spec(
        r#"{ "values": { "values": [1.0, 1.0] } }"#,
        "0.5",
        r#"{ "stochastic": { "mean_delay": 2.0 } }"#,
        r#", "momentum_policy": { "decay": { "scalar": 0.8 } }, "seed": 11"#,
    );

    let mut optimizer = OptimizerBuilder::new().build(spec, Beale).unwrap();
    let report = optimizer.train(500).unwrap();

    assert!(report.steps <= 500);
    assert!(optimizer.momentum().iter().all(|&m| (0.0..=0.5).contains(&m)));
}

#[test]
fn exhausted_report() {
    let spec = spec(
        r#"{ "values": { "values": [1.0, 1.0] } }"#,
        "0.0",
        r#"{ "fixed": { "delay": 1 } }"#,
        "",
    );

    let mut optimizer = OptimizerBuilder::new()
        .build(spec, Quadratic::centered(vec![1., 1.]))
        .unwrap();

    let report = optimizer.train(10).unwrap();

    assert_eq!(report.state, State::Exhausted);
    assert_eq!(report.steps, 10);
    assert_eq!(optimizer.trajectory().len(), 11);
}

#[test]
fn invalid_specs() {
    let values = r#"{ "values": { "values": [1.0, 1.0] } }"#;
    let fixed = r#"{ "fixed": { "delay": 1 } }"#;
    let builder = OptimizerBuilder::new();
    let objective = || Quadratic::centered(vec![1., 1.]);

    let zero_delay = spec(values, "0.5", r#"{ "fixed": { "delay": 0 } }"#, "");
    assert!(matches!(
        builder.build(zero_delay, objective()).err(),
        Some(OptimErr::InvalidDelay)
    ));

    let short_momentum = spec(values, "[0.5]", fixed, "");
    assert!(matches!(
        builder.build(short_momentum, objective()).err(),
        Some(OptimErr::SizeMismatch { what: "momentum", got: 1, expected: 2 })
    ));

    let short_start = spec(r#"{ "values": { "values": [1.0] } }"#, "0.5", fixed, "");
    assert!(matches!(
        builder.build(short_start, objective()).err(),
        Some(OptimErr::SizeMismatch { got: 1, expected: 2, .. })
    ));

    let empty_range = spec(r#"{ "uniform": { "low": 1.0, "high": -1.0 } }"#, "0.5", fixed, "");
    assert!(matches!(
        builder.build(empty_range, objective()).err(),
        Some(OptimErr::Distribution(_))
    ));

    let strong_decay = spec(
        values,
        "0.5",
        fixed,
        r#", "momentum_policy": { "decay": { "scalar": 1.5 } }"#,
    );
    assert!(matches!(
        builder.build(strong_decay, objective()).err(),
        Some(OptimErr::InvalidHyperparameter { .. })
    ));

    let mut no_variables = spec(values, "0.5", fixed, "");
    no_variables.variables.clear();
    let err = builder.build(no_variables, objective()).err().unwrap();
    assert!(matches!(err, OptimErr::NoVariables));
    assert!(err.is_config());
}
