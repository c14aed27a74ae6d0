mod service_tests;
