mod memory_tests;
