//! Fixed datasets for unit tests.

use dataset::Dataset;
use types::{Embarked, Passenger, PassengerClass, PassengerId, Sex};

fn passenger(
    id: u64,
    survived: bool,
    class: PassengerClass,
    sex: Sex,
    age: u8,
    fare: f64,
) -> Passenger {
    Passenger {
        id: PassengerId(id),
        survived,
        class,
        name: format!("Passenger {id}"),
        sex,
        age,
        siblings_spouses: 0,
        parents_children: 0,
        fare,
        embarked: Embarked::S,
    }
}

/// Five passengers, survived = [1, 0, 1, 0, 1].
///
/// Ages 5, 10, 25, 80, 41 and fares summing to 200.
pub fn five_passengers() -> Dataset {
    use PassengerClass::{First, Second, Third};
    use Sex::{Female, Male};

    Dataset::from_records(vec![
        passenger(1, true, First, Female, 5, 100.0),
        passenger(2, false, Third, Male, 10, 10.0),
        passenger(3, true, Second, Female, 25, 30.0),
        passenger(4, false, Third, Male, 80, 8.0),
        passenger(5, true, First, Male, 41, 52.0),
    ])
    .expect("fixture is valid")
}

/// Two first-class men, leaving every other group empty.
pub fn first_class_men() -> Dataset {
    Dataset::from_records(vec![
        passenger(1, true, PassengerClass::First, Sex::Male, 30, 50.0),
        passenger(2, false, PassengerClass::First, Sex::Male, 40, 50.0),
    ])
    .expect("fixture is valid")
}
