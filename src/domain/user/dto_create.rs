/// Raw registration input, validated by the user flow.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub phone: String,
}
