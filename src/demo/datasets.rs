//! Fixed sample datasets used by the demo sections.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: &'static str,
    pub department: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: &'static str,
    pub grades: Vec<u32>,
}

/// A student as enrolled in courses, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseStudent {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub student_id: u32,
    pub course_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub person_id: u32,
    pub name: &'static str,
}

pub fn users() -> Vec<User> {
    vec![
        User { id: 1, name: "Alice", age: 30 },
        User { id: 2, name: "Bob", age: 25 },
        User { id: 3, name: "Charlie", age: 35 },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order { id: 1, user_id: 1, amount: 250 },
        Order { id: 2, user_id: 2, amount: 150 },
        Order { id: 3, user_id: 1, amount: 50 },
        Order { id: 4, user_id: 3, amount: 500 },
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee { name: "John", department: "HR" },
        Employee { name: "Jane", department: "IT" },
        Employee { name: "Sam", department: "HR" },
        Employee { name: "Sara", department: "IT" },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student { name: "John", grades: vec![85, 92, 78] },
        Student { name: "Jane", grades: vec![88, 79, 91] },
        Student { name: "Sam", grades: vec![60, 70, 68] },
    ]
}

pub fn course_students() -> Vec<CourseStudent> {
    vec![
        CourseStudent { id: 1, name: "John" },
        CourseStudent { id: 2, name: "Jane" },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course { student_id: 1, course_name: "Math" },
        Course { student_id: 1, course_name: "Science" },
        Course { student_id: 2, course_name: "History" },
    ]
}

pub fn people() -> Vec<Person> {
    vec![
        Person { id: 0, name: "Matvey", age: 22 },
        Person { id: 1, name: "Tanya", age: 20 },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product { person_id: 0, name: "Chitos" },
        Product { person_id: 0, name: "Doritos" },
        Product { person_id: 1, name: "Lays" },
    ]
}
