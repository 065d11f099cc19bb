use infodecomp::containers::InfoContainer;
use infodecomp::estimators::decomposition::{
    discrete_joint_info, discrete_mutual_info, redundancy, synergy, unique,
};

fn main() {
    // Scenario 1: Y is a copy of X1, X2 is independent of Y.
    let data_y = vec![0, 0, 1, 1];
    let data_x1 = vec![0, 0, 1, 1];
    let data_x2 = vec![0, 1, 0, 1];

    let y = InfoContainer::discrete(&data_y, None);
    println!("Copied-source scenario");
    println!("  H(Y) = {} bits", y.entropy().unwrap().value);
    println!(
        "  I(Y;X1) = {} bits",
        discrete_mutual_info(&data_y, &data_x1, None, None).unwrap()
    );
    println!(
        "  I(Y;X2) = {} bits",
        discrete_mutual_info(&data_y, &data_x2, None, None).unwrap()
    );
    println!(
        "  redundancy = {} bits",
        redundancy(&data_y, &data_x1, &data_x2).unwrap()
    );
    let (u1, u2) = unique(&data_y, &data_x1, &data_x2).unwrap();
    println!("  unique = ({u1}, {u2}) bits");
    println!(
        "  synergy = {} bits",
        synergy(&data_y, &data_x1, &data_x2).unwrap()
    );

    // Scenario 2: Y = X1 XOR X2. Neither source alone tells anything about
    // Y; together they determine it completely.
    let data_y = vec![0, 1, 1, 0];
    println!("XOR scenario");
    println!(
        "  I(Y;X1) = {} bits",
        discrete_mutual_info(&data_y, &data_x1, None, None).unwrap()
    );
    println!(
        "  I(Y;X2) = {} bits",
        discrete_mutual_info(&data_y, &data_x2, None, None).unwrap()
    );
    println!(
        "  I(Y;X1,X2) = {} bits",
        discrete_joint_info(&data_y, &data_x1, &data_x2, None, None, None).unwrap()
    );
    println!(
        "  redundancy = {} bits",
        redundancy(&data_y, &data_x1, &data_x2).unwrap()
    );
    println!(
        "  synergy = {} bits",
        synergy(&data_y, &data_x1, &data_x2).unwrap()
    );
}
