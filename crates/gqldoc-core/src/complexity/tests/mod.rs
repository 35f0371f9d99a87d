mod default_operation_complexity_calculator_tests;
