mod test_utils;
mod testcases;
