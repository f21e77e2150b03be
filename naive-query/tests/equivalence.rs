//! The lazy operators in `query-rs` must agree with the eager reference
//! operators on every input.

use std::fmt::Debug;

use naive_query::ops;
use proptest::collection::vec;
use proptest::prelude::*;
use query_rs::demo::datasets::{self, Course, CourseStudent, Order, Person, Product, User};
use query_rs::{IntoQuery, SortOrder};

fn assert_equivalence<T: PartialEq + Debug>(operator: &str, lazy: Vec<T>, naive: Vec<T>) {
    assert_eq!(lazy, naive, "lazy output differs from naive for {operator}");
}

// --- Demo dataset fixtures ---

#[test]
fn equiv_filter_users() {
    let users = datasets::users();
    assert_equivalence(
        "filter",
        users.clone().query().filter(|u| u.age >= 30).to_vec(),
        ops::filter(&users, |u| u.age >= 30),
    );
}

#[test]
fn equiv_select_user_names() {
    let users = datasets::users();
    assert_equivalence(
        "select",
        users.iter().query().select(|u| u.name).to_vec(),
        ops::select(&users, |u| u.name),
    );
}

#[test]
fn equiv_order_users_by_age() {
    let users = datasets::users();
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        assert_equivalence(
            "order_by",
            users.clone().query().order_by_with(|u| u.age, order).to_vec(),
            ops::order_by(&users, |u| u.age, order),
        );
    }
}

#[test]
fn equiv_group_orders_by_user() {
    let orders = datasets::orders();
    let lazy: Vec<(u32, Vec<Order>)> = orders
        .clone()
        .query()
        .group_by(|o| o.user_id)
        .select(|g| g.into_parts())
        .to_vec();
    assert_equivalence("group_by", lazy, ops::group_by(&orders, |o| o.user_id));
}

#[test]
fn equiv_join_users_orders() {
    let users = datasets::users();
    let orders = datasets::orders();
    let lazy = users
        .clone()
        .query()
        .join(
            orders.clone(),
            |u: &User| u.id,
            |o: &Order| o.user_id,
            |u: &User, o: &Order| (u.name, o.amount),
        )
        .to_vec();
    let naive = ops::join(
        &users,
        &orders,
        |u| u.id,
        |o| o.user_id,
        |u, o| (u.name, o.amount),
    );
    assert_equivalence("join", lazy, naive);
}

#[test]
fn equiv_join_students_courses() {
    let students = datasets::course_students();
    let courses = datasets::courses();
    let lazy = students
        .clone()
        .query()
        .join(
            courses.clone(),
            |s: &CourseStudent| s.id,
            |c: &Course| c.student_id,
            |s: &CourseStudent, c: &Course| (s.name, c.course_name),
        )
        .to_vec();
    let naive = ops::join(
        &students,
        &courses,
        |s| s.id,
        |c| c.student_id,
        |s, c| (s.name, c.course_name),
    );
    assert_equivalence("join", lazy, naive);
}

#[test]
fn equiv_group_join_people_products() {
    let people = datasets::people();
    let products = datasets::products();
    let lazy = people
        .clone()
        .query()
        .group_join(
            products.clone(),
            |p: &Person| p.id,
            |p: &Product| p.person_id,
            |person: Person, bought: &[Product]| (person.name, bought.to_vec()),
        )
        .to_vec();
    let naive = ops::group_join(
        &people,
        &products,
        |p| p.id,
        |p| p.person_id,
        |person, bought| (person.name, bought.to_vec()),
    );
    assert_equivalence("group_join", lazy, naive);
}

#[test]
fn equiv_aggregate_order_total() {
    let orders = datasets::orders();
    let lazy = orders.clone().query().aggregate(0i64, |sum, o| sum + o.amount);
    let naive = ops::aggregate(&orders, 0i64, |sum, o| sum + o.amount);
    assert_eq!(lazy, naive);
    assert_eq!(lazy, 950);
}

#[test]
fn equiv_first_user() {
    let users = datasets::users();
    assert_eq!(
        users.clone().query().first(),
        ops::first(&users, |_| true)
    );
    assert_eq!(
        users.clone().query().first_where(|u| u.age > 99),
        ops::first(&users, |u| u.age > 99)
    );
}

#[test]
fn equiv_set_operations_on_demo_sets() {
    let numbers = vec![1, 2, 2, 3, 4, 4, 5];
    let set1 = vec![1, 2, 3];
    let set2 = vec![3, 4, 5];
    assert_equivalence(
        "distinct",
        numbers.clone().query().distinct().to_vec(),
        ops::distinct(&numbers),
    );
    assert_equivalence(
        "union",
        set1.clone().query().union(set2.clone()).to_vec(),
        ops::union(&set1, &set2),
    );
    assert_equivalence(
        "intersect",
        set1.clone().query().intersect(set2.clone()).to_vec(),
        ops::intersect(&set1, &set2),
    );
    assert_equivalence(
        "except",
        set1.clone().query().except(set2.clone()).to_vec(),
        ops::except(&set1, &set2),
    );
}

#[test]
fn equiv_zip_uneven() {
    let numbers = vec![1, 2, 3, 4, 5];
    let letters = vec!["a", "b", "c"];
    assert_equivalence(
        "zip",
        numbers.clone().query().zip(letters.clone()).to_vec(),
        ops::zip(&numbers, &letters),
    );
}

// --- Generated inputs ---

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    vec(-5i32..5, 0..40)
}

fn keyed_rows() -> impl Strategy<Value = Vec<(u8, i32)>> {
    vec((0u8..6, -100i32..100), 0..40)
}

proptest! {
    #[test]
    fn prop_filter_matches_naive(xs in small_ints(), threshold in -5i32..5) {
        let lazy = xs.clone().query().filter(|x| *x > threshold).to_vec();
        prop_assert_eq!(lazy, ops::filter(&xs, |x| *x > threshold));
    }

    #[test]
    fn prop_order_by_matches_naive(rows in keyed_rows(), descending in any::<bool>()) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let lazy = rows.clone().query().order_by_with(|r| r.0, order).to_vec();
        prop_assert_eq!(lazy, ops::order_by(&rows, |r| r.0, order));
    }

    #[test]
    fn prop_group_by_matches_naive(rows in keyed_rows()) {
        let lazy: Vec<(u8, Vec<(u8, i32)>)> = rows
            .clone()
            .query()
            .group_by(|r| r.0)
            .select(|g| g.into_parts())
            .to_vec();
        prop_assert_eq!(lazy, ops::group_by(&rows, |r| r.0));
    }

    #[test]
    fn prop_join_matches_naive(outer in keyed_rows(), inner in keyed_rows()) {
        let lazy = outer
            .clone()
            .query()
            .join(
                inner.clone(),
                |o: &(u8, i32)| o.0,
                |i: &(u8, i32)| i.0,
                |o: &(u8, i32), i: &(u8, i32)| (o.1, i.1),
            )
            .to_vec();
        let naive = ops::join(&outer, &inner, |o| o.0, |i| i.0, |o, i| (o.1, i.1));
        prop_assert_eq!(lazy, naive);
    }

    #[test]
    fn prop_group_join_matches_naive(outer in keyed_rows(), inner in keyed_rows()) {
        let lazy = outer
            .clone()
            .query()
            .group_join(
                inner.clone(),
                |o: &(u8, i32)| o.0,
                |i: &(u8, i32)| i.0,
                |o: (u8, i32), matched: &[(u8, i32)]| (o, matched.to_vec()),
            )
            .to_vec();
        let naive = ops::group_join(&outer, &inner, |o| o.0, |i| i.0, |o, matched| {
            (o, matched.to_vec())
        });
        prop_assert_eq!(lazy, naive);
    }

    #[test]
    fn prop_set_operations_match_naive(a in small_ints(), b in small_ints()) {
        prop_assert_eq!(a.clone().query().distinct().to_vec(), ops::distinct(&a));
        prop_assert_eq!(a.clone().query().union(b.clone()).to_vec(), ops::union(&a, &b));
        prop_assert_eq!(
            a.clone().query().intersect(b.clone()).to_vec(),
            ops::intersect(&a, &b)
        );
        prop_assert_eq!(a.clone().query().except(b.clone()).to_vec(), ops::except(&a, &b));
    }

    #[test]
    fn prop_zip_and_aggregate_match_naive(a in small_ints(), b in small_ints()) {
        prop_assert_eq!(a.clone().query().zip(b.clone()).to_vec(), ops::zip(&a, &b));
        let lazy = a.clone().query().aggregate(0i64, |acc, x| acc.wrapping_mul(3).wrapping_add(i64::from(x)));
        let naive = ops::aggregate(&a, 0i64, |acc, x| acc.wrapping_mul(3).wrapping_add(i64::from(*x)));
        prop_assert_eq!(lazy, naive);
    }

    #[test]
    fn prop_first_matches_naive(xs in small_ints(), target in -5i32..5) {
        prop_assert_eq!(
            xs.clone().query().first_where(|x| *x == target),
            ops::first(&xs, |x| *x == target)
        );
    }
}
