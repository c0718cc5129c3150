use crate::dates::DateInput;
use crate::json::JSON;

impl JSON for DateInput {}
