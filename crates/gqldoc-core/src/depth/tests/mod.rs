mod operation_depth_calculator_tests;
