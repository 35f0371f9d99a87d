mod execution_plan_generator_tests;
