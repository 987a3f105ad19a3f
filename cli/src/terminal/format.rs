pub fn factorial_line(n: i64, value: u128) -> String {
    format!("Factorial of {n} is: {value}")
}

pub fn prime_line(n: i64, prime: bool) -> String {
    format!("Is {n} prime? {prime}")
}
