//! The printed demo sections.
//!
//! Each section runs a handful of queries against the fixed datasets and
//! writes one line per result row.

use std::io::Write;

use super::DemoError;
use super::datasets::{self, Order, Person, Product, User};
use crate::IntoQuery;

pub fn simple<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let users = datasets::users();
    let orders = datasets::orders();

    writeln!(out, "SIMPLE EXAMPLES")?;

    writeln!(out, "Users aged 30 or older:")?;
    for user in users.iter().query().filter(|u| u.age >= 30) {
        writeln!(out, "{}, {}", user.name, user.age)?;
    }

    writeln!(out, "\nUser names:")?;
    for name in users.iter().query().select(|u| u.name) {
        writeln!(out, "{name}")?;
    }

    writeln!(out, "\nUsers sorted by age:")?;
    for user in users.iter().query().order_by(|u| u.age) {
        writeln!(out, "{}, {}", user.name, user.age)?;
    }

    writeln!(out, "\nOrders grouped by UserId:")?;
    for group in orders.iter().query().group_by(|o| o.user_id) {
        writeln!(out, "User {}:", group.key())?;
        for order in &group {
            writeln!(out, "  Order {}, Amount: {}", order.id, order.amount)?;
        }
    }

    writeln!(out, "\nJoin Users and Orders:")?;
    let user_orders = users.iter().query().join(
        orders.iter(),
        |u: &&User| u.id,
        |o: &&Order| o.user_id,
        |u: &&User, o: &&Order| (u.name, o.amount),
    );
    for (name, amount) in user_orders {
        writeln!(out, "{name}, Order Amount: {amount}")?;
    }

    let total = orders.iter().query().aggregate(0i64, |sum, o| sum + o.amount);
    writeln!(out, "\nTotal order amount: {total}")?;

    let first = users.iter().query().first()?;
    writeln!(out, "\nFirst user: {}, {}", first.name, first.age)?;

    writeln!(out, "\nDistinct numbers:")?;
    for number in vec![1, 2, 2, 3, 4, 4, 5].query().distinct() {
        writeln!(out, "{number}")?;
    }

    let set1 = vec![1, 2, 3];
    let set2 = vec![3, 4, 5];
    write_numbers(
        out,
        "\nUnion of sets:",
        set1.clone().query().union(set2.clone()),
    )?;
    write_numbers(
        out,
        "\nIntersect of sets:",
        set1.clone().query().intersect(set2.clone()),
    )?;
    write_numbers(out, "\nExcept of sets:", set1.query().except(set2))?;

    Ok(())
}

pub fn complex<W: Write>(out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "COMPLEX EXAMPLES")?;

    let departments = datasets::employees()
        .query()
        .group_by(|e| e.department)
        .select(|g| (*g.key(), g.len()))
        .to_vec();
    for (department, employee_count) in departments {
        writeln!(
            out,
            "{{ department: {department}, employee_count: {employee_count} }}"
        )?;
    }
    writeln!(out)?;

    let top_students = datasets::students()
        .query()
        .filter(|s| s.grades.iter().any(|g| *g > 90))
        .to_vec();
    for student in top_students {
        writeln!(out, "{}", student.name)?;
    }
    writeln!(out)?;

    let student_courses = datasets::course_students()
        .query()
        .join(
            datasets::courses(),
            |s| s.id,
            |c| c.student_id,
            |s, c| (s.name, c.course_name),
        )
        .to_vec();
    for (student_name, course_name) in student_courses {
        writeln!(out, "{student_name} : {course_name}")?;
    }

    Ok(())
}

pub fn live<W: Write>(out: &mut W) -> Result<(), DemoError> {
    writeln!(out, "LIVE EXAMPLES")?;

    let collection = [1, 2, 3, 4, 5];
    let collection2 = ["a", "b", "c", "d", "f"];

    for line in collection
        .query()
        .select_indexed(|i, x| format!("{i} {x}"))
    {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "ZIP")?;
    for (number, letter) in collection.query().zip(collection2) {
        writeln!(out, "({number}, {letter})")?;
    }

    let people = datasets::people();
    let products = datasets::products();

    writeln!(out, "\nJoin")?;
    let bought_separately = people.iter().query().join(
        products.iter(),
        |p: &&Person| p.id,
        |p: &&Product| p.person_id,
        |person: &&Person, product: &&Product| format!("{} bought {}", person.name, product.name),
    );
    for line in bought_separately {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\nGroup Join")?;
    let bought_all = people.iter().query().group_join(
        products.iter(),
        |p: &&Person| p.id,
        |p: &&Product| p.person_id,
        |person: &Person, bought: &[&Product]| {
            let names: Vec<&str> = bought.iter().map(|p| p.name).collect();
            format!("{} bought {}", person.name, names.join(","))
        },
    );
    for line in bought_all {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\nOrder By")?;
    for person in people.iter().query().order_by(|p| p.age) {
        writeln!(out, "{person:?}")?;
    }

    Ok(())
}

fn write_numbers<W, I>(out: &mut W, title: &str, numbers: I) -> Result<(), DemoError>
where
    W: Write,
    I: Iterator<Item = i32>,
{
    writeln!(out, "{title}")?;
    for number in numbers {
        writeln!(out, "{number}")?;
    }
    Ok(())
}
