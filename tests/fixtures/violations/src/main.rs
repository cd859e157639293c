fn main() {} // crazy
