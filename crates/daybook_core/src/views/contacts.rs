//! Contact list projections.

use crate::model::contact::{Contact, ContactGroup};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

fn by_name(a: &&Contact, b: &&Contact) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then(a.id.cmp(&b.id))
}

/// Contacts grouped by `group`, each group sorted by name.
pub fn contacts_by_group<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> BTreeMap<ContactGroup, Vec<&'a Contact>> {
    let mut groups: BTreeMap<ContactGroup, Vec<&'a Contact>> = BTreeMap::new();
    for contact in contacts {
        groups.entry(contact.group).or_default().push(contact);
    }
    for members in groups.values_mut() {
        members.sort_by(by_name);
    }
    groups
}

pub fn favorites<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&'a Contact> {
    let mut selected = contacts
        .into_iter()
        .filter(|contact| contact.is_favorite)
        .collect::<Vec<_>>();
    selected.sort_by(by_name);
    selected
}

/// Case-insensitive match on name, phone digits or email.
pub fn search_contacts<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    query: &str,
) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    let digits = needle.chars().filter(char::is_ascii_digit).collect::<String>();
    let mut selected = contacts
        .into_iter()
        .filter(|contact| {
            needle.is_empty()
                || contact.name.to_lowercase().contains(&needle)
                || contact
                    .email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(&needle))
                || (!digits.is_empty()
                    && contact.phone.as_deref().is_some_and(|phone| {
                        phone
                            .chars()
                            .filter(char::is_ascii_digit)
                            .collect::<String>()
                            .contains(&digits)
                    }))
        })
        .collect::<Vec<_>>();
    selected.sort_by(by_name);
    selected
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    pub next_date: NaiveDate,
    pub days_until: i64,
    /// Age reached on `next_date`.
    pub turning: i32,
}

/// Birthdays falling within `within_days` of `today`, soonest first.
pub fn upcoming_birthdays<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    today: NaiveDate,
    within_days: i64,
) -> Vec<UpcomingBirthday<'a>> {
    let mut upcoming = contacts
        .into_iter()
        .filter_map(|contact| {
            let birthday = contact.birthday?;
            let next_date = next_birthday(birthday, today)?;
            let days_until = (next_date - today).num_days();
            (days_until <= within_days).then_some(UpcomingBirthday {
                contact,
                next_date,
                days_until,
                turning: next_date.year() - birthday.year(),
            })
        })
        .collect::<Vec<_>>();
    upcoming.sort_by(|a, b| {
        a.days_until
            .cmp(&b.days_until)
            .then_with(|| by_name(&a.contact, &b.contact))
    });
    upcoming
}

/// Next anniversary of `birthday` on or after `today`.
///
/// Feb 29 birthdays fall on Feb 28 in common years.
pub fn next_birthday(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birthday, today.year() + 1)
    }
}

fn anniversary(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

#[cfg(test)]
mod tests {
    use super::{contacts_by_group, next_birthday, search_contacts, upcoming_birthdays};
    use crate::model::contact::{Contact, ContactGroup, NewContact};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, group: ContactGroup, birthday: Option<NaiveDate>) -> Contact {
        let mut input = NewContact::named(name, group);
        input.birthday = birthday;
        input.phone = Some("+998 90 123-45-67".to_string());
        Contact::from_new(input)
    }

    #[test]
    fn leap_day_birthday_moves_to_feb_28() {
        let birthday = date(2000, 2, 29);
        assert_eq!(next_birthday(birthday, date(2026, 1, 10)), Some(date(2026, 2, 28)));
        assert_eq!(next_birthday(birthday, date(2027, 3, 1)), Some(date(2028, 2, 29)));
    }

    #[test]
    fn upcoming_birthdays_wrap_year_and_sort() {
        let today = date(2026, 12, 20);
        let contacts = vec![
            contact("Bek", ContactGroup::Friends, Some(date(1990, 1, 2))),
            contact("Ali", ContactGroup::Family, Some(date(1985, 12, 20))),
            contact("Far", ContactGroup::Work, Some(date(1990, 6, 1))),
            contact("None", ContactGroup::Other, None),
        ];
        let upcoming = upcoming_birthdays(&contacts, today, 30);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].contact.name, "Ali");
        assert_eq!(upcoming[0].days_until, 0);
        assert_eq!(upcoming[0].turning, 41);
        assert_eq!(upcoming[1].next_date, date(2027, 1, 2));
        assert_eq!(upcoming[1].days_until, 13);
    }

    #[test]
    fn grouping_and_phone_search() {
        let contacts = vec![
            contact("zara", ContactGroup::Family, None),
            contact("Anna", ContactGroup::Family, None),
            contact("Tom", ContactGroup::Work, None),
        ];
        let groups = contacts_by_group(&contacts);
        let family = groups[&ContactGroup::Family]
            .iter()
            .map(|contact| contact.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(family, vec!["Anna", "zara"]);
        assert_eq!(search_contacts(&contacts, "123 45").len(), 3);
        assert_eq!(search_contacts(&contacts, "TOM").len(), 1);
        assert!(search_contacts(std::iter::empty(), "x").is_empty());
    }
}
