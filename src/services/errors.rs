#[derive(Debug, PartialEq)]
pub enum OrderServiceError {
    /// Empty item list or a non-positive quantity.
    EmptyOrder,
    InvalidQuantity,
    MissingShippingAddress,
    OrderNotFound,
    ProductNotFound(i32),
    /// Requested quantity exceeds available stock; the whole order was
    /// rolled back.
    InsufficientStock(i32),
    InvalidStatusTransition,
    DatabaseError,
}

impl std::error::Error for OrderServiceError {}

impl std::fmt::Display for OrderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderServiceError::EmptyOrder => write!(f, "Order has no items"),
            OrderServiceError::InvalidQuantity => write!(f, "Quantity must be positive"),
            OrderServiceError::MissingShippingAddress => {
                write!(f, "Shipping address is required")
            }
            OrderServiceError::OrderNotFound => write!(f, "Order not found"),
            OrderServiceError::ProductNotFound(id) => write!(f, "Product {} not found", id),
            OrderServiceError::InsufficientStock(id) => {
                write!(f, "Insufficient stock for product {}", id)
            }
            OrderServiceError::InvalidStatusTransition => write!(f, "Invalid status transition"),
            OrderServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CartServiceError {
    ProductNotFound,
    CartItemNotFound,
    InvalidQuantity,
    /// Resulting quantity would exceed the product's live stock.
    ExceedsStock,
    DatabaseError,
}

impl std::error::Error for CartServiceError {}

impl std::fmt::Display for CartServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartServiceError::ProductNotFound => write!(f, "Product not found"),
            CartServiceError::CartItemNotFound => write!(f, "Cart item not found"),
            CartServiceError::InvalidQuantity => write!(f, "Quantity must be positive"),
            CartServiceError::ExceedsStock => write!(f, "Quantity exceeds available stock"),
            CartServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    ProductNotFound,
    CategoryNotFound,
    MissingRequiredFields,
    ProductCreationFailed,
    ProductUpdateFailed,
    ProductDeletionFailed,
    DatabaseError,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::ProductNotFound => write!(f, "Product not found"),
            ProductServiceError::CategoryNotFound => write!(f, "Category not found"),
            ProductServiceError::MissingRequiredFields => {
                write!(f, "Name, price and category are required")
            }
            ProductServiceError::ProductCreationFailed => write!(f, "Product creation failed"),
            ProductServiceError::ProductUpdateFailed => write!(f, "Product update failed"),
            ProductServiceError::ProductDeletionFailed => write!(f, "Product deletion failed"),
            ProductServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum UserServiceError {
    UserNotFound,
    IdentityTaken,
    EmailTaken,
    InvalidCredentials,
    HashingFailed,
    TokenCreationFailed,
    DatabaseError,
}

impl std::error::Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserServiceError::UserNotFound => write!(f, "User not found"),
            UserServiceError::IdentityTaken => write!(f, "Username or email already exists"),
            UserServiceError::EmailTaken => write!(f, "Email already used by another account"),
            UserServiceError::InvalidCredentials => write!(f, "Invalid username or password"),
            UserServiceError::HashingFailed => write!(f, "Password hashing failed"),
            UserServiceError::TokenCreationFailed => write!(f, "Token creation failed"),
            UserServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AddressServiceError {
    AddressNotFound,
    IncompleteAddress,
    DatabaseError,
}

impl std::error::Error for AddressServiceError {}

impl std::fmt::Display for AddressServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressServiceError::AddressNotFound => write!(f, "Address not found"),
            AddressServiceError::IncompleteAddress => {
                write!(f, "All address fields are required")
            }
            AddressServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AdminServiceError {
    UserNotFound,
    CannotDeleteAdmin,
    OrderNotFound,
    InvalidStatus,
    DatabaseError,
}

impl std::error::Error for AdminServiceError {}

impl std::fmt::Display for AdminServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminServiceError::UserNotFound => write!(f, "User not found"),
            AdminServiceError::CannotDeleteAdmin => write!(f, "Admin accounts cannot be deleted"),
            AdminServiceError::OrderNotFound => write!(f, "Order not found"),
            AdminServiceError::InvalidStatus => write!(f, "Unknown order status"),
            AdminServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
